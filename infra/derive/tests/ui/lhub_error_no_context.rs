use lhub_derive::lhub_error;

#[lhub_error]
pub enum RegistryError {
    #[error("render failed: {source}")]
    Render {
        #[source]
        source: std::fmt::Error,
    },
}

fn main() {}
