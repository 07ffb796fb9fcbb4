//! Substring search over in-memory lists, safe to run on every keystroke.

/// Extracts one searchable text from a record; `None` never matches.
pub type Selector<T> = Box<dyn Fn(&T) -> Option<String> + Send + Sync>;

/// Filter `items` down to those where at least one selector value contains
/// the trimmed, lower-cased `termino`. An empty term keeps the list as is.
pub fn filtrar<T: Clone>(items: &[T], termino: &str, selectores: &[Selector<T>]) -> Vec<T> {
    let termino = termino.trim().to_lowercase();
    if termino.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| {
            selectores.iter().any(|selector| {
                selector(item)
                    .map(|valor| valor.to_lowercase().contains(&termino))
                    .unwrap_or(false)
            })
        })
        .cloned()
        .collect()
}
