pub mod compute;
pub mod template;
