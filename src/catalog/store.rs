//! SQLite-backed product catalog.
//!
//! The storefront's source of truth is a remote products table; this store
//! keeps a local copy so browsing, search, and recommendations work without
//! a round trip. Rows are replaced wholesale on refresh and stamped with a
//! timestamp so callers know when the copy has gone stale.
//!
//! The recommendation core never touches this store directly: callers load
//! rows and hand slices to the pure scoring pipeline.

use std::path::Path;

use chrono::{Duration, Utc};
use rusqlite::{params, Connection};
use tracing::info;

use crate::error::ChargeScoutError;
use crate::parser::{parse_charger_specs, Phase};

use super::types::ProductRecord;

/// Catalog TTL in days before a refresh from the source of truth is due.
const CATALOG_TTL_DAYS: i64 = 7;

const PRODUCT_COLUMNS: &str = "id, slug, name, description, brand, category_slug, price, sku, \
     voltage, current_amps, phase, chemistries, quick_ship, search_text";

/// Result from catalog search, best match first.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogSearchMatch {
    pub product: ProductRecord,
    pub score: f32,
}

/// SQLite-backed product catalog with scored text search and spec backfill.
pub struct CatalogStore {
    conn: Connection,
}

impl CatalogStore {
    /// Open or create the catalog database.
    pub fn open(db_path: &Path) -> Result<Self, ChargeScoutError> {
        let conn = Connection::open(db_path)?;

        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS products (
                id TEXT PRIMARY KEY,
                slug TEXT NOT NULL UNIQUE,
                name TEXT NOT NULL,
                description TEXT NOT NULL DEFAULT '',
                brand TEXT,
                category_slug TEXT,
                price REAL,
                sku TEXT,
                voltage INTEGER,
                current_amps INTEGER,
                phase TEXT,
                chemistries TEXT,
                quick_ship INTEGER NOT NULL DEFAULT 0,
                search_text TEXT NOT NULL
            );
            CREATE INDEX IF NOT EXISTS idx_products_search ON products(search_text);
            CREATE INDEX IF NOT EXISTS idx_products_category ON products(category_slug);

            CREATE TABLE IF NOT EXISTS catalog_meta (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );",
        )?;

        Ok(Self { conn })
    }

    /// Whether the catalog is empty or older than the TTL.
    pub fn needs_refresh(&self) -> Result<bool, ChargeScoutError> {
        let mut stmt = self
            .conn
            .prepare("SELECT value FROM catalog_meta WHERE key = 'last_refresh'")?;

        let result: Result<String, _> = stmt.query_row([], |row| row.get(0));

        match result {
            Ok(timestamp) => {
                let last_refresh = chrono::DateTime::parse_from_rfc3339(&timestamp)?;
                let threshold = Utc::now() - Duration::days(CATALOG_TTL_DAYS);
                Ok(last_refresh < threshold)
            }
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(true),
            Err(e) => Err(e.into()),
        }
    }

    /// Number of products in the catalog.
    pub fn count(&self) -> Result<usize, ChargeScoutError> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM products", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Clear and repopulate the catalog, stamping the refresh time.
    pub fn refresh(&self, products: &[ProductRecord]) -> Result<(), ChargeScoutError> {
        self.conn.execute("DELETE FROM products", [])?;

        let mut stmt = self.conn.prepare(&format!(
            "INSERT OR REPLACE INTO products ({PRODUCT_COLUMNS})
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)"
        ))?;

        for product in products {
            let phase = product.phase.map(|p| p.label().to_string());
            let chemistries = match &product.chemistries {
                Some(list) => Some(serde_json::to_string(list)?),
                None => None,
            };
            stmt.execute(params![
                product.id,
                product.slug,
                product.name,
                product.description,
                product.brand,
                product.category_slug,
                product.price,
                product.sku,
                product.voltage,
                product.current_amps,
                phase,
                chemistries,
                product.quick_ship,
                product.search_text(),
            ])?;
        }

        self.conn.execute(
            "INSERT OR REPLACE INTO catalog_meta (key, value) VALUES ('last_refresh', ?1)",
            params![Utc::now().to_rfc3339()],
        )?;

        info!("Refreshed catalog with {} products", products.len());
        Ok(())
    }

    /// Load every product in the catalog, slug order.
    pub fn load_all(&self) -> Result<Vec<ProductRecord>, ChargeScoutError> {
        let rows = self.query_products("ORDER BY slug")?;
        Ok(rows.into_iter().map(|(product, _)| product).collect())
    }

    /// Search the catalog. Returns matches sorted by score, best first.
    pub fn search(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<CatalogSearchMatch>, ChargeScoutError> {
        let query_lower = query.trim().to_lowercase();
        if query_lower.is_empty() {
            return Ok(vec![]);
        }
        let query_words: Vec<&str> = query_lower.split_whitespace().collect();

        let rows = self.query_products("")?;

        let mut matches: Vec<CatalogSearchMatch> = rows
            .into_iter()
            .filter_map(|(product, search_text)| {
                let score = compute_match_score(&query_words, &search_text);
                (score > 0.0).then_some(CatalogSearchMatch { product, score })
            })
            .collect();

        matches.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        matches.truncate(limit);

        Ok(matches)
    }

    /// All distinct brand names, alphabetical.
    pub fn list_brands(&self) -> Result<Vec<String>, ChargeScoutError> {
        let mut stmt = self.conn.prepare(
            "SELECT DISTINCT brand FROM products WHERE brand IS NOT NULL ORDER BY brand",
        )?;
        let brands = stmt.query_map([], |row| row.get(0))?;
        Ok(brands.collect::<Result<Vec<_>, _>>()?)
    }

    /// Parse listings for every row missing structured spec columns and
    /// persist what the parser could determine. Columns the parser could
    /// not determine stay NULL so a later, richer listing can fill them.
    ///
    /// Returns the number of rows that received at least one value.
    pub fn backfill_specs(&self) -> Result<usize, ChargeScoutError> {
        let rows = self.query_products(
            "WHERE voltage IS NULL OR current_amps IS NULL
                OR phase IS NULL OR chemistries IS NULL",
        )?;

        let mut stmt = self.conn.prepare(
            "UPDATE products SET
                voltage = COALESCE(voltage, ?1),
                current_amps = COALESCE(current_amps, ?2),
                phase = COALESCE(phase, ?3),
                chemistries = COALESCE(chemistries, ?4)
             WHERE slug = ?5",
        )?;

        let total = rows.len();
        let mut updated = 0;
        for (product, _) in &rows {
            let specs = parse_charger_specs(product);
            let phase = (specs.phase != Phase::Unknown).then(|| specs.phase.label().to_string());
            // An inferred chemistry list is a guess, not data; leave the
            // column NULL so the scorer keeps treating it as unknown.
            let chemistries = if specs.chemistry_inferred {
                None
            } else {
                Some(serde_json::to_string(&specs.chemistries)?)
            };

            if specs.voltage.is_none()
                && specs.current_amps.is_none()
                && phase.is_none()
                && chemistries.is_none()
            {
                continue;
            }

            stmt.execute(params![
                specs.voltage,
                specs.current_amps,
                phase,
                chemistries,
                product.slug,
            ])?;
            updated += 1;
        }

        info!("Backfilled specs for {} of {} products", updated, total);
        Ok(updated)
    }

    /// Fetch products with their indexed search text. `clause` is appended
    /// verbatim to the SELECT (WHERE/ORDER BY).
    fn query_products(
        &self,
        clause: &str,
    ) -> Result<Vec<(ProductRecord, String)>, ChargeScoutError> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {PRODUCT_COLUMNS} FROM products {clause}"))?;

        let rows = stmt.query_map([], |row| {
            Ok((
                ProductRecord {
                    id: row.get(0)?,
                    slug: row.get(1)?,
                    name: row.get(2)?,
                    description: row.get(3)?,
                    brand: row.get(4)?,
                    category_slug: row.get(5)?,
                    price: row.get(6)?,
                    sku: row.get(7)?,
                    voltage: row.get(8)?,
                    current_amps: row.get(9)?,
                    phase: None,
                    chemistries: None,
                    quick_ship: row.get(12)?,
                },
                row.get::<_, Option<String>>(10)?,
                row.get::<_, Option<String>>(11)?,
                row.get::<_, String>(13)?,
            ))
        })?;

        let mut products = Vec::new();
        for row in rows {
            let (mut product, phase_text, chemistries_json, search_text) = row?;
            product.phase =
                phase_text.map(|label| Phase::from_label(&label).unwrap_or(Phase::Unknown));
            if let Some(json) = chemistries_json {
                product.chemistries = Some(serde_json::from_str(&json)?);
            }
            products.push((product, search_text));
        }
        Ok(products)
    }
}

/// Score a query against an indexed search blob, word by word: exact word
/// match 10, word prefix 6, substring 3. A query with unmatched words is
/// heavily discounted instead of dropped, and the total is normalized by
/// query length so longer queries don't dominate the ranking.
fn compute_match_score(query_words: &[&str], search_text: &str) -> f32 {
    if query_words.is_empty() {
        return 0.0;
    }
    let search_words: Vec<&str> = search_text.split_whitespace().collect();

    let mut total = 0.0;
    let mut all_matched = true;
    for qw in query_words {
        if search_words.iter().any(|sw| sw == qw) {
            total += 10.0;
        } else if search_words.iter().any(|sw| sw.starts_with(qw)) {
            total += 6.0;
        } else if search_words.iter().any(|sw| sw.contains(qw)) {
            total += 3.0;
        } else {
            all_matched = false;
        }
    }

    if total == 0.0 {
        return 0.0;
    }
    if !all_matched {
        total *= 0.25;
    }

    total / query_words.len() as f32
}
