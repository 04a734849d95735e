use lhub_derive::lhub_error;

#[lhub_error]
pub enum RegistryError {
    UnknownTag(String),
}

fn main() {}
