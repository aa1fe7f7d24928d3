//! CSV export for admin listings
//!
//! RFC 4180 quoting: fields containing commas, quotes, or newlines are
//! wrapped in double quotes with embedded quotes doubled.

use std::path::{Path, PathBuf};
use chrono::Utc;
use crate::models::{Stock, User};
use crate::utils::errors::Result;
use crate::utils::helpers::{format_file_timestamp, format_timestamp};
use crate::utils::logging::log_export;

/// Quote a single CSV field if it needs it
pub fn csv_escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Render header + rows as CSV text
fn render_csv(header: &[&str], rows: Vec<Vec<String>>) -> String {
    let mut out = String::new();
    out.push_str(&header.join(","));
    out.push_str("\r\n");

    for row in rows {
        let line: Vec<String> = row.iter().map(|f| csv_escape(f)).collect();
        out.push_str(&line.join(","));
        out.push_str("\r\n");
    }

    out
}

/// Write the user list to `<output_dir>/users-<timestamp>.csv`
pub async fn write_users_csv(users: &[User], output_dir: impl AsRef<Path>) -> Result<PathBuf> {
    let rows = users
        .iter()
        .map(|user| {
            vec![
                user.name.clone(),
                user.email.clone(),
                user.organization.clone().unwrap_or_default(),
                user.designation.clone().unwrap_or_default(),
                u8::from(user.admin).to_string(),
                user.created_at.map(format_timestamp).unwrap_or_default(),
            ]
        })
        .collect();

    let contents = render_csv(
        &["name", "email", "organization", "designation", "admin", "created_at"],
        rows,
    );

    let path = output_dir
        .as_ref()
        .join(format!("users-{}.csv", format_file_timestamp(Utc::now())));
    tokio::fs::write(&path, contents).await?;

    log_export("users", users.len(), &path.display().to_string());
    Ok(path)
}

/// Write the stock inventory to `<output_dir>/stock-<timestamp>.csv`
pub async fn write_stock_csv(items: &[Stock], output_dir: impl AsRef<Path>) -> Result<PathBuf> {
    let rows = items
        .iter()
        .map(|item| {
            vec![
                item.name.clone(),
                item.kind.clone(),
                item.count.to_string(),
            ]
        })
        .collect();

    let contents = render_csv(&["name", "type", "count"], rows);

    let path = output_dir
        .as_ref()
        .join(format!("stock-{}.csv", format_file_timestamp(Utc::now())));
    tokio::fs::write(&path, contents).await?;

    log_export("stock", items.len(), &path.display().to_string());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_fields_pass_through() {
        assert_eq!(csv_escape("Widget Labs"), "Widget Labs");
    }

    #[test]
    fn test_commas_and_quotes_are_quoted() {
        assert_eq!(csv_escape("Labs, Widget"), "\"Labs, Widget\"");
        assert_eq!(csv_escape("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_render_shape() {
        let csv = render_csv(
            &["a", "b"],
            vec![vec!["1".to_string(), "x,y".to_string()]],
        );
        assert_eq!(csv, "a,b\r\n1,\"x,y\"\r\n");
    }
}
