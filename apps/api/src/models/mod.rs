pub mod draft;
pub mod record;
pub mod template;
