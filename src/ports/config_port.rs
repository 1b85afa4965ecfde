//! Configuration access port trait.

/// Sectioned key/value lookup.
pub trait ConfigPort {
    fn get_string(&self, section: &str, key: &str) -> Option<String>;
}
