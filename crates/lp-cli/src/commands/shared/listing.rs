use serde::Serialize;

/// A record together with the 1-based position commands accept for it.
#[derive(Debug, Serialize)]
pub struct Numbered<T> {
    pub position: usize,
    #[serde(flatten)]
    pub record: T,
}

/// Number `records` from 1 in the given order and keep the first `limit`.
pub fn numbered<T>(records: impl IntoIterator<Item = T>, limit: usize) -> Vec<Numbered<T>> {
    records
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(index, record)| Numbered {
            position: index + 1,
            record,
        })
        .collect()
}
