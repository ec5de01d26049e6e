use std::fs;

pub fn settings_export() {
    print!("{}", dmeta_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        dmeta_core::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    println!(
        "OK: encoding.max_length={}, matching.max_length={}",
        s.encoding.max_length, s.matching.max_length
    );
}
