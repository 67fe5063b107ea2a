use crate::{
    error::{AppError, AppResult},
    models::{RecommendationRow, SourceTable, RECOMMENDATIONS_PER_SOURCE},
};

/// Minimum comma-separated fields a data row needs: the key plus five items.
const MIN_FIELDS_PER_ROW: usize = RECOMMENDATIONS_PER_SOURCE + 1;

/// Parses delimited source text into a [`SourceTable`].
///
/// The first line is a header and is only checked for presence. Data rows are
/// split on commas with no quote or escape handling; a field containing an
/// embedded comma will shift that row's data, which is an accepted limitation
/// of the source format rather than something to repair here. Rows with fewer
/// than six fields and blank lines are skipped, not fatal. Fields are kept
/// verbatim, with no trimming.
pub fn load(source_text: &str) -> AppResult<SourceTable> {
    let mut lines = source_text.lines();

    let header = lines
        .next()
        .ok_or_else(|| AppError::MalformedSource("missing header line".to_string()))?;
    if header.trim().is_empty() {
        return Err(AppError::MalformedSource("missing header line".to_string()));
    }

    let mut table = SourceTable::default();
    let mut skipped = 0usize;

    for line in lines {
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() < MIN_FIELDS_PER_ROW {
            skipped += 1;
            continue;
        }

        table.insert(RecommendationRow {
            key: fields[0].to_string(),
            items: std::array::from_fn(|i| fields[i + 1].to_string()),
        });
    }

    if skipped > 0 {
        tracing::debug!(skipped, "Skipped short rows during table load");
    }

    Ok(table)
}

/// Reads a source table from disk and parses it.
pub async fn load_from_path(path: &str) -> AppResult<SourceTable> {
    let source_text = tokio::fs::read_to_string(path).await?;
    let table = load(&source_text)?;

    tracing::info!(path = %path, row_count = table.len(), "Loaded source table");

    Ok(table)
}
