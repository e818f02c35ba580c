/// Convert a breed name into the key used by the breed store and breed routes
///
/// Lower-cases the name, replaces every run of whitespace with a single
/// hyphen, then drops anything outside `[a-z0-9-]`.
///
/// ```
/// use breed_match::core::breed_key;
///
/// assert_eq!(breed_key("Labrador Retriever"), "labrador-retriever");
/// assert_eq!(breed_key("Cavalier King Charles Spaniel"), "cavalier-king-charles-spaniel");
/// ```
pub fn breed_key(breed_name: &str) -> String {
    let lowered = breed_name.to_lowercase();
    let mut key = String::with_capacity(lowered.len());
    let mut in_whitespace = false;

    for c in lowered.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                key.push('-');
                in_whitespace = true;
            }
            continue;
        }
        in_whitespace = false;

        if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' {
            key.push(c);
        }
    }

    key
}

/// Route of the breed profile page for a breed name
pub fn breed_route(breed_name: &str) -> String {
    format!("/breeds/{}", breed_key(breed_name))
}
