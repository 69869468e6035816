pub fn price(value: f64) -> String {
    format!("{value:.2}")
}
