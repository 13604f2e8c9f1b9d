pub mod assess;
pub mod grade;
pub mod init;
pub mod roadmap;
pub mod validate;
