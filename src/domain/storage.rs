use crate::error::Result;

pub trait Storage: Send + Sync {
    fn save_report(&self, name: &str, lines: &[String]) -> Result<()>;
}
