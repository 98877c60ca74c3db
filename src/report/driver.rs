use anyhow::{Context, Result};

use super::{Report, ReportOutcome};
use crate::api::constants::{self, ID_FIELD};
use crate::api::{Entity, EntitySource, EntityStore};
use crate::config::FieldCatalog;
use crate::graph::ids::single_cells;
use crate::graph::{IdCell, LinkValue, project, resolve_links};
use crate::input::ReportInput;
use crate::table::{FormattedTable, Table, assemble, column_key};

const ACCESSION_ROOT_SHEET: &str = "input_file_sets";
const ACCESSION_ROOT_PREFIX: &str = "input_file_set";
const LIST_ROOT_SHEET: &str = "file_sets";
const LIST_ROOT_PREFIX: &str = "file_set";
const ANALYSIS_SET_PREFIX: &str = "analysis_set";

/// Root objects of a report and where their columns go
struct Roots {
    sheet: &'static str,
    prefix: &'static str,
    cells: Vec<IdCell>,
}

/// Builds the sheets of one report run
///
/// Owns the run's fetch cache, so an object reached from several sheets is
/// requested once. Fetches happen one at a time in row and field order.
pub struct ReportDriver<'a> {
    catalog: &'a FieldCatalog,
    store: EntityStore<'a>,
}

impl<'a> ReportDriver<'a> {
    pub fn new(source: &'a dyn EntitySource, catalog: &'a FieldCatalog) -> Self {
        Self {
            catalog,
            store: EntityStore::new(source),
        }
    }

    pub async fn run(mut self, input: &ReportInput) -> Result<ReportOutcome> {
        let catalog = self.catalog;

        let (roots, analysis_set) = match input {
            ReportInput::Accession(accession) => {
                let path = constants::analysis_set_path(accession);
                log::info!("Fetching analysis set {}", path);
                let analysis_set = self
                    .store
                    .get(&path)
                    .await
                    .with_context(|| format!("Failed to fetch analysis set {}", accession))?
                    .clone();
                let roots = Roots {
                    sheet: ACCESSION_ROOT_SHEET,
                    prefix: ACCESSION_ROOT_PREFIX,
                    cells: link_rows(&analysis_set, &catalog.root_kind),
                };
                (roots, Some(analysis_set))
            }
            ReportInput::PathList { paths, .. } => {
                let roots = Roots {
                    sheet: LIST_ROOT_SHEET,
                    prefix: LIST_ROOT_PREFIX,
                    cells: single_cells(paths.iter().cloned()),
                };
                (roots, None)
            }
        };

        let analysis_set_sheets: Vec<(String, Vec<IdCell>)> = match &analysis_set {
            Some(entity) => catalog
                .report
                .analysis_set_sheets
                .iter()
                .map(|field| (field.clone(), link_rows(entity, field)))
                .filter(|(_, cells)| !cells.is_empty())
                .collect(),
            None => Vec::new(),
        };

        if roots.cells.is_empty() && analysis_set_sheets.is_empty() {
            log::warn!("No input objects found for '{}'", input.name());
            return Ok(ReportOutcome::NoInput);
        }

        let mut report = Report::new(input);

        if !roots.cells.is_empty() {
            self.build_root_sheets(&roots, &mut report).await?;
        }

        for (field, cells) in analysis_set_sheets {
            let name = column_key(&[ANALYSIS_SET_PREFIX, field.as_str()]);
            log::info!("Building sheet '{}' from {} objects", name, cells.len());
            let sheet = self
                .build_linked_sheet(&cells, &field, &name)
                .await
                .with_context(|| format!("Failed to build sheet '{}'", name))?;
            report.sheets.insert(name, sheet);
        }

        log::info!(
            "Report '{}' has {} sheets from {} fetched objects",
            report.name,
            report.sheets.len(),
            self.store.len()
        );
        Ok(ReportOutcome::Ready(report))
    }

    /// Root sheet plus one secondary sheet per configured link kind
    async fn build_root_sheets(&mut self, roots: &Roots, report: &mut Report) -> Result<()> {
        let catalog = self.catalog;
        log::info!(
            "Building sheet '{}' from {} objects",
            roots.sheet,
            roots.cells.len()
        );

        let base = project(
            &mut self.store,
            &roots.cells,
            &catalog.root_projection(),
            roots.prefix,
        )
        .await?;
        let id_key = column_key(&[roots.prefix, ID_FIELD]);
        let id_column = base.select(&[id_key.as_str()]);

        let mut tables = vec![base];
        tables.extend(
            self.expand(&roots.cells, &catalog.root_kind, roots.prefix)
                .await?,
        );
        let sheet = assemble(tables).with_context(|| format!("Failed to assemble sheet '{}'", roots.sheet))?;
        report.sheets.insert(roots.sheet.to_string(), sheet);

        // Secondary sheets hold linked objects, so they need at least one hop
        if catalog.report.max_hops == 0 {
            log::debug!("Hop limit is 0, no secondary sheets for '{}'", roots.sheet);
            return Ok(());
        }

        let root_links = catalog.links_for(&catalog.root_kind);
        for kind in &catalog.report.secondary_sheets {
            if !root_links.contains(kind) {
                log::debug!("'{}' is not a link of '{}', no sheet built", kind, catalog.root_kind);
                continue;
            }

            let links = resolve_links(
                &mut self.store,
                &roots.cells,
                std::slice::from_ref(kind),
                roots.prefix,
            )
            .await?;
            let Some(column) = links.column(kind).filter(|column| column.has_targets()) else {
                log::info!("No {} linked from '{}'", kind, roots.sheet);
                continue;
            };

            let name = format!("{}.{}", roots.sheet, kind);
            log::info!("Building sheet '{}'", name);
            let mut tables = vec![id_column.clone()];
            tables.extend(self.expand(&column.cells, kind, &column.target_prefix()).await?);
            let sheet = assemble(tables).with_context(|| format!("Failed to assemble sheet '{}'", name))?;
            report.sheets.insert(name, sheet);
        }

        Ok(())
    }

    /// Sheet whose rows are the objects in `cells`, projected then expanded
    async fn build_linked_sheet(&mut self, cells: &[IdCell], kind: &str, prefix: &str) -> Result<FormattedTable> {
        let fields = self.catalog.fields_for(kind);
        let mut tables = vec![project(&mut self.store, cells, &fields, prefix).await?];
        tables.extend(self.expand(cells, kind, prefix).await?);
        assemble(tables)
    }

    /// Follow the link fields of `kind` outward from `cells`
    ///
    /// Each hop resolves the links of the current objects and projects every
    /// link column that reaches something. The objects reached become the
    /// next hop's starting point, until `max_hops` is used up or nothing
    /// further is linked.
    async fn expand(&mut self, cells: &[IdCell], kind: &str, prefix: &str) -> Result<Vec<Table>> {
        let catalog = self.catalog;
        let mut tables = Vec::new();
        let mut frontier = vec![(kind.to_string(), prefix.to_string(), cells.to_vec())];

        for hop in 1..=catalog.report.max_hops {
            let mut next = Vec::new();
            for (kind, prefix, cells) in frontier {
                let link_fields = catalog.links_for(&kind);
                if link_fields.is_empty() {
                    continue;
                }

                log::debug!("Hop {}: resolving {} links under '{}'", hop, link_fields.len(), prefix);
                let links = resolve_links(&mut self.store, &cells, link_fields, &prefix).await?;
                tables.push(links.to_table());

                for column in links.into_columns() {
                    if !column.has_targets() {
                        continue;
                    }
                    let target_prefix = column.target_prefix();
                    let fields = catalog.fields_for(&column.field);
                    tables.push(project(&mut self.store, &column.cells, &fields, &target_prefix).await?);
                    next.push((column.field, target_prefix, column.cells));
                }
            }

            if next.is_empty() {
                break;
            }
            frontier = next;
        }

        Ok(tables)
    }
}

/// One row per object linked from `entity` through `field`
fn link_rows(entity: &Entity, field: &str) -> Vec<IdCell> {
    single_cells(LinkValue::from_field(entity.get(field)).targets().iter().cloned())
}
