pub mod media;
pub mod toc;
pub mod track;
