#[macro_use]
extern crate lazy_static;

pub mod properties;
pub mod ucd;

mod compiled;
mod tables;

pub use tables::CanonicalTables;
pub use tables::CodepointRanges;
pub use tables::CompatibilityTables;
pub use tables::Decompositions;
pub use tables::QuickCheck;
pub use tables::TableStats;

pub use ucd::UcdError;
pub use ucd::UcdTables;

lazy_static! {
    /// канонические таблицы: комбинирование, декомпозиция, композиция, быстрые проверки
    pub static ref CANONICAL_TABLES: CanonicalTables = compiled::canonical();
    /// таблицы совместимости - строятся отдельно от канонических, при первом обращении к NFKC / NFKD
    pub static ref COMPATIBILITY_TABLES: CompatibilityTables = compiled::compatibility();
}

/// источник таблиц нормализации
pub trait TableSource: Sync
{
    fn canonical(&self) -> &CanonicalTables;
    fn compatibility(&self) -> &CompatibilityTables;
}

/// таблицы, построенные из данных Unicode, вкомпилированных в ICU4X
#[derive(Debug, Clone, Copy, Default)]
pub struct CompiledTables;

impl TableSource for CompiledTables
{
    fn canonical(&self) -> &CanonicalTables
    {
        &CANONICAL_TABLES
    }

    fn compatibility(&self) -> &CompatibilityTables
    {
        &COMPATIBILITY_TABLES
    }
}
