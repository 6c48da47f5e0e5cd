pub mod run;
pub mod script;
