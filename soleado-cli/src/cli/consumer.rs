use clap::Parser;

use crate::core::profile::ConsumerProfile;

#[must_use]
#[derive(Parser)]
pub struct ConsumerArgs {
    /// Full name of the household owner.
    #[clap(long, env = "CONSUMER_NAME")]
    pub name: String,

    #[clap(long, env = "CONSUMER_ADDRESS")]
    pub address: String,

    #[clap(long, env = "CONSUMER_CITY")]
    pub city: String,

    /// Socioeconomic stratum.
    #[clap(long, env = "CONSUMER_STRATUM", value_parser = clap::value_parser!(u8).range(1..=6))]
    pub stratum: u8,

    #[clap(long, env = "CONSUMER_EMAIL")]
    pub email: String,

    #[clap(long, env = "CONSUMER_PHONE")]
    pub phone: String,
}

impl ConsumerArgs {
    pub fn profile(&self) -> ConsumerProfile {
        ConsumerProfile {
            name: self.name.clone(),
            address: self.address.clone(),
            city: self.city.clone(),
            stratum: self.stratum,
            email: self.email.clone(),
            phone: self.phone.clone(),
        }
    }
}
