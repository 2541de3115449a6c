use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Идентификатор агрегата, который передается в URL и хранится как TEXT
pub trait AggregateId:
    Clone + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Строковая форма для путей API и колонки `id`
    fn as_string(&self) -> String;

    /// Разбор строки из пути запроса; ошибка содержит причину
    fn from_string(s: &str) -> Result<Self, String>;
}
