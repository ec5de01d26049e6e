/// Reject a broken `default_settings.toml` before it is embedded.
fn main() {
    let path = "src/default_settings.toml";
    println!("cargo:rerun-if-changed={path}");

    let table: toml::Table = include_str!("src/default_settings.toml")
        .parse()
        .unwrap_or_else(|e| panic!("{path}: {e}"));

    for (section, min) in [("encoding", 0), ("matching", 1)] {
        let max_length = table
            .get(section)
            .and_then(|s| s.get("max_length"))
            .and_then(toml::Value::as_integer);
        match max_length {
            Some(n) if n >= min => {}
            _ => panic!("{path}: [{section}] max_length must be an integer >= {min}"),
        }
    }
}
