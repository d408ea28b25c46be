/// Checked before a config is cached or written back.
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}
