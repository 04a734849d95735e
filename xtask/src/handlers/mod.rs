pub mod apps;
pub mod features;
pub mod libs;
pub mod run;
pub mod serve;
pub mod setup;
pub mod testing;
