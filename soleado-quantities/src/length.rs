quantity!(Metres, suffix: "m", precision: 0);
