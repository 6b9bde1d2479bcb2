use std::path::{Path, PathBuf};
use sqlref::catalog::Catalog;
use sqlref::category::Category;
use sqlref::config::{self, SqlrefConfig, DEFAULT_PORT};
use sqlref::content::{bundled, Document};
use sqlref::output::{emit_success, OutputMode};
use sqlref::server::{self, AppState, DEFAULT_SEARCH_LIMIT};
use sqlref::ui::{self, Icons};
use owo_colors::OwoColorize;

/// Config plus the catalog it describes
pub struct Context {
    pub config: SqlrefConfig,
    pub catalog: Catalog,
}

impl Context {
    pub fn load(config_path: Option<&Path>) -> anyhow::Result<Self> {
        let loaded = config::load_config(config_path)?.unwrap_or_default();
        let catalog = loaded.build_catalog()?;
        tracing::debug!("Catalog ready with {} topics", catalog.len());
        Ok(Self {
            config: loaded.config,
            catalog,
        })
    }
}

fn parse_category(name: Option<&str>) -> anyhow::Result<Option<Category>> {
    Ok(name.map(str::parse::<Category>).transpose()?)
}

pub fn run_show(ctx: &Context, id: &str, output_mode: OutputMode) -> anyhow::Result<()> {
    let entry = ctx.catalog.get_by_id(id)?;
    if output_mode.is_human() {
        ui::print_topic(entry);
    } else {
        emit_success("show", entry)?;
    }
    Ok(())
}

pub fn run_list(ctx: &Context, category: Option<&str>, output_mode: OutputMode) -> anyhow::Result<()> {
    let entries: Vec<_> = match category {
        Some(name) => ctx.catalog.list_by_category_name(name)?,
        None => ctx.catalog.entries().iter().collect(),
    };

    if !output_mode.is_human() {
        return emit_success("list", &entries);
    }

    match category {
        Some(name) => ui::section(&format!("Topics in '{}'", name)),
        None => ui::section("All topics"),
    }
    if entries.is_empty() {
        println!("{} No topics in this category.", Icons::CROSS);
    } else {
        println!("{}", ui::topic_table(entries.iter().copied()));
    }
    Ok(())
}

pub fn run_search(ctx: &Context, query: &str, limit: Option<usize>, output_mode: OutputMode) -> anyhow::Result<()> {
    let limit = limit
        .or(ctx.config.search_limit)
        .unwrap_or(DEFAULT_SEARCH_LIMIT);
    let hits: Vec<_> = ctx.catalog.search(query).into_iter().take(limit).collect();

    if !output_mode.is_human() {
        return emit_success("search", &hits);
    }

    println!("{} Searching for: '{}' (limit: {})...", Icons::SEARCH, query, limit);
    if hits.is_empty() {
        println!("{} No topics found.", Icons::CROSS);
    } else {
        for hit in &hits {
            ui::print_hit(hit);
        }
    }
    Ok(())
}

pub fn run_categories(ctx: &Context, output_mode: OutputMode) -> anyhow::Result<()> {
    let counts = ctx.catalog.categories();
    if output_mode.is_human() {
        ui::section(&format!("{} Categories", Icons::STATS));
        println!("{}", ui::category_table(&counts));
    } else {
        emit_success("categories", &counts)?;
    }
    Ok(())
}

pub fn run_quiz(ctx: &Context, category: Option<&str>, reveal: bool, output_mode: OutputMode) -> anyhow::Result<()> {
    let category = parse_category(category)?;
    let pairs = ctx.catalog.questions(category);

    if !output_mode.is_human() {
        let data: Vec<_> = pairs
            .iter()
            .map(|(entry, q)| {
                let answer = reveal.then_some(q.answer.as_str());
                serde_json::json!({
                    "id": entry.id,
                    "category": entry.category,
                    "question": q.question,
                    "answer": answer,
                })
            })
            .collect();
        return emit_success("quiz", data);
    }

    ui::banner(
        "Study questions",
        &match category {
            Some(c) => format!("{} questions in {}", pairs.len(), c.label()),
            None => format!("{} questions across all topics", pairs.len()),
        },
    );
    for (number, (entry, q)) in pairs.iter().enumerate() {
        ui::print_question(number + 1, entry, q, reveal);
    }
    if !reveal && !pairs.is_empty() {
        println!();
        println!("{}", ui::dim("Run again with --reveal to see the answers."));
    }
    Ok(())
}

pub fn run_check(files: &[PathBuf], with_bundled: bool, output_mode: OutputMode) -> anyhow::Result<()> {
    let mut docs = if with_bundled { bundled::documents() } else { Vec::new() };
    for path in files {
        docs.push(Document::from_path(path)?);
    }
    if docs.is_empty() {
        anyhow::bail!("nothing to check: give at least one file or --with-bundled");
    }

    let mut per_document = Vec::with_capacity(docs.len());
    for doc in &docs {
        per_document.push((doc.name.clone(), doc.parse()?.len()));
    }
    let catalog = Catalog::from_documents(&docs)?;

    if output_mode.is_human() {
        for (name, count) in &per_document {
            ui::info(name, &format!("{} topics", count));
        }
        ui::success(&format!("{} topics after merging", catalog.len()));
    } else {
        let documents: Vec<_> = per_document
            .iter()
            .map(|(name, count)| serde_json::json!({"name": name, "topics": count}))
            .collect();
        emit_success("check", serde_json::json!({
            "documents": documents,
            "topics": catalog.len(),
        }))?;
    }
    Ok(())
}

pub fn run_init(config_path: Option<&Path>, force: bool, output_mode: OutputMode) -> anyhow::Result<()> {
    let path = config_path.map(Path::to_path_buf).unwrap_or_else(config::default_config_path);
    let config = SqlrefConfig {
        search_limit: Some(DEFAULT_SEARCH_LIMIT),
        port: Some(DEFAULT_PORT),
        ..SqlrefConfig::default()
    };
    config::write_config(&path, &config, force)?;

    if output_mode.is_human() {
        ui::success(&format!("Wrote {}", path.display()));
    } else {
        emit_success("init", serde_json::json!({ "path": path }))?;
    }
    Ok(())
}

pub fn run_serve(ctx: Context, port: Option<u16>) -> anyhow::Result<()> {
    let port = port.or(ctx.config.port).unwrap_or(DEFAULT_PORT);
    ui::banner(
        &format!("{}", "Sqlref server".bold()),
        &format!("{} topics, read-only", ctx.catalog.len()),
    );

    let state = AppState::new(ctx.catalog, ctx.config.search_limit);
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server::start_server(port, state))
}

pub fn run_version(output_mode: OutputMode) -> anyhow::Result<()> {
    if output_mode.is_human() {
        ui::banner(
            &format!("{}", "Sqlref".style(ui::theme().title)),
            &format!("Version {}", env!("CARGO_PKG_VERSION").bold()),
        );
    } else {
        emit_success("version", serde_json::json!({ "version": env!("CARGO_PKG_VERSION") }))?;
    }
    Ok(())
}

/// Report a failed command in the selected output mode
pub fn report_error(err: &anyhow::Error, output_mode: OutputMode) {
    let kind = err
        .downcast_ref::<sqlref::Error>()
        .map(sqlref::Error::kind)
        .unwrap_or("error");

    if output_mode.is_human() {
        ui::error(&err.to_string());
        if let Some(sqlref::Error::NotFound(id)) = err.downcast_ref::<sqlref::Error>() {
            let words = id.replace('-', " ");
            ui::warn(&format!("Try: sqlref search \"{}\"", words));
        }
    } else {
        let envelope = sqlref::output::error_envelope(kind, &err.to_string());
        println!("{}", envelope);
    }
}
