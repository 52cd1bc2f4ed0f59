/// Data ingest clients, one file per external source.

pub mod willyweather;

#[cfg(test)]
pub(crate) mod fixtures;
