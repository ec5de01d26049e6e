use dmeta_core::settings::settings;
use dmeta_core::Encoder;

pub fn match_cmd(a: &str, b: &str, max_length: Option<usize>) {
    let encoder = match max_length.unwrap_or(settings().matching.max_length) {
        0 => Encoder::new(),
        n => Encoder::with_max_length(n),
    };
    let ca = encoder.encode(a);
    let cb = encoder.encode(b);

    println!("{a}\t{}\t{}", ca.primary, ca.secondary);
    println!("{b}\t{}\t{}", cb.primary, cb.secondary);
    println!("match: {}", if ca.matches(&cb) { "yes" } else { "no" });
}
