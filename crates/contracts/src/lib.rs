//! Общие типы для frontend и backend
//!
//! - `domain` - агрегаты и DTO (travel request, report draft)
//! - `shared` - API-ответы и правила загрузки файлов

pub mod domain;
pub mod shared;
