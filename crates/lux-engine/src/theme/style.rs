/// Custom property holding the theme's foreground color.
pub const TEXT_PRIMARY: &str = "--text-primary";

/// Read access to computed style custom properties.
///
/// Lookups never fail: an unknown property yields an empty string, which
/// callers treat as "inherit".
pub trait StyleSource {
    fn property(&self, name: &str) -> String;

    fn text_primary(&self) -> String {
        self.property(TEXT_PRIMARY).trim().to_string()
    }
}

/// Fixed property table, for headless hosts and tests.
#[derive(Debug, Default, Clone)]
pub struct StaticStyle {
    properties: Vec<(String, String)>,
}

impl StaticStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: &str, value: &str) {
        match self.properties.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => *v = value.to_string(),
            None => self.properties.push((name.to_string(), value.to_string())),
        }
    }
}

impl StyleSource for StaticStyle {
    fn property(&self, name: &str) -> String {
        self.properties
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.clone())
            .unwrap_or_default()
    }
}
