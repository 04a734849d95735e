use lhub_derive::lhub_error;

#[lhub_error]
pub enum RegistryError {
    #[error("unknown component tag `{tag}`")]
    UnknownTag { tag: String, context: String },
}

fn main() {}
