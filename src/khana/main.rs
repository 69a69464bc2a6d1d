use clap::Parser;
use directories::ProjectDirs;
use khana::api::{KhanaApi, SubmitOutcome};
use khana::error::{KhanaError, Result};
use khana::form::RecipeForm;
use khana::model::{Difficulty, Theme};
use khana::query::FilterSpec;
use khana::store::fs::FileStore;
use khana::store::StorageBackend;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;
use uuid::Uuid;

mod args;
mod print;

use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: KhanaApi<FileStore>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::Add {
            title,
            description,
            ingredients,
            steps,
            prep,
            cook,
            difficulty,
            image_url,
        }) => handle_add(
            &mut ctx,
            RawFields {
                title,
                description,
                ingredients,
                steps,
                prep,
                cook,
                difficulty,
                image_url,
            },
        ),
        Some(Commands::List {
            search,
            difficulty,
            max_time,
        }) => handle_list(&ctx, search, difficulty, max_time),
        Some(Commands::Show { id }) => handle_show(&ctx, &id),
        Some(Commands::Edit {
            id,
            title,
            description,
            ingredients,
            steps,
            prep,
            cook,
            difficulty,
            image_url,
        }) => handle_edit(
            &mut ctx,
            &id,
            RawFields {
                title,
                description,
                ingredients,
                steps,
                prep,
                cook,
                difficulty,
                image_url,
            },
        ),
        Some(Commands::Rm { id, yes }) => handle_rm(&mut ctx, &id, yes),
        Some(Commands::Theme { value }) => handle_theme(&mut ctx, value),
        None => handle_list(&ctx, None, None, None),
    }
}

fn init_context() -> Result<AppContext> {
    let data_dir = match std::env::var_os("KHANA_DATA_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => {
            let proj_dirs =
                ProjectDirs::from("com", "khana", "khana").expect("Could not determine data dir");
            proj_dirs.data_dir().to_path_buf()
        }
    };

    let store = FileStore::new(data_dir);
    let api = KhanaApi::init(store)?;
    Ok(AppContext { api })
}

/// Raw flag values, forwarded untouched; all coercion happens in the
/// validation engine.
struct RawFields {
    title: Option<String>,
    description: Option<String>,
    ingredients: Vec<String>,
    steps: Vec<String>,
    prep: Option<String>,
    cook: Option<String>,
    difficulty: Option<String>,
    image_url: Option<String>,
}

impl RawFields {
    fn into_form(self) -> RecipeForm {
        RecipeForm {
            title: self.title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            ingredients: self.ingredients.join("\n"),
            steps: self.steps.join("\n"),
            prep_time: self.prep.unwrap_or_default(),
            cook_time: self.cook.unwrap_or_default(),
            difficulty: self.difficulty.unwrap_or_default(),
            image_url: self.image_url.unwrap_or_default(),
        }
    }

    /// Overlay the provided flags on a prefilled form; untouched flags keep
    /// the stored values.
    fn overlay(self, mut form: RecipeForm) -> RecipeForm {
        if let Some(title) = self.title {
            form.title = title;
        }
        if let Some(description) = self.description {
            form.description = description;
        }
        if !self.ingredients.is_empty() {
            form.ingredients = self.ingredients.join("\n");
        }
        if !self.steps.is_empty() {
            form.steps = self.steps.join("\n");
        }
        if let Some(prep) = self.prep {
            form.prep_time = prep;
        }
        if let Some(cook) = self.cook {
            form.cook_time = cook;
        }
        if let Some(difficulty) = self.difficulty {
            form.difficulty = difficulty;
        }
        if let Some(image_url) = self.image_url {
            form.image_url = image_url;
        }
        form
    }
}

fn handle_add(ctx: &mut AppContext, fields: RawFields) -> Result<()> {
    let outcome = ctx.api.submit(&fields.into_form())?;
    render_outcome(outcome, "added");
    Ok(())
}

fn handle_list(
    ctx: &AppContext,
    search: Option<String>,
    difficulty: Option<String>,
    max_time: Option<u32>,
) -> Result<()> {
    let difficulty: Option<Difficulty> = match difficulty.as_deref() {
        None | Some("all") => None,
        Some(value) => Some(value.parse()?),
    };
    let spec = FilterSpec {
        search,
        difficulty,
        max_total_time: max_time,
    };

    print::print_recipes(&ctx.api.query(&spec));
    Ok(())
}

fn handle_show(ctx: &AppContext, raw_id: &str) -> Result<()> {
    let id = resolve_id(&ctx.api, raw_id)?;
    let recipe = ctx
        .api
        .find_by_id(id)
        .ok_or(KhanaError::RecipeNotFound(id))?;
    print::print_recipe(recipe);
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, raw_id: &str, fields: RawFields) -> Result<()> {
    let id = resolve_id(&ctx.api, raw_id)?;
    let form = ctx
        .api
        .prefill(id)
        .ok_or(KhanaError::RecipeNotFound(id))?;

    let outcome = ctx.api.submit_update(id, &fields.overlay(form))?;
    render_outcome(outcome, "updated");
    Ok(())
}

fn handle_rm(ctx: &mut AppContext, raw_id: &str, yes: bool) -> Result<()> {
    let id = resolve_id(&ctx.api, raw_id)?;
    let title = match ctx.api.find_by_id(id) {
        Some(recipe) => recipe.title.clone(),
        None => return Err(KhanaError::RecipeNotFound(id)),
    };

    if !yes && !confirm(&format!("Delete '{}'? [y/N] ", title))? {
        print::info("Aborted.");
        return Ok(());
    }

    if ctx.api.delete(id)? {
        print::success(format!("Recipe removed: {}", title));
    } else {
        print::warning("Nothing was removed.");
    }
    Ok(())
}

fn handle_theme(ctx: &mut AppContext, value: Option<String>) -> Result<()> {
    match value {
        None => println!("{}", ctx.api.theme()),
        Some(value) => {
            let theme = Theme::from_str(&value)?;
            ctx.api.set_theme(theme)?;
            print::success(format!("Theme set to {}", theme));
        }
    }
    Ok(())
}

/// Render the outcome of a form submission. Validation failure and unknown
/// ids are user-correctable: print everything the user needs and exit 1.
fn render_outcome(outcome: SubmitOutcome, verb: &str) {
    match outcome {
        SubmitOutcome::Saved(recipe) => {
            print::success(format!("Recipe {}: {}", verb, recipe.title));
            print::info(format!("id: {}", print::short_id(&recipe)));
        }
        SubmitOutcome::Invalid(errors) => {
            print::print_field_errors(&errors);
            std::process::exit(1);
        }
        SubmitOutcome::NotFound => {
            print::error_line("No recipe with that id.");
            std::process::exit(1);
        }
    }
}

/// Accept a full uuid or a unique prefix of the simple (dashless) form.
fn resolve_id<S: StorageBackend>(api: &KhanaApi<S>, raw: &str) -> Result<Uuid> {
    if let Ok(id) = Uuid::parse_str(raw) {
        return Ok(id);
    }

    let needle = raw.to_lowercase();
    let matches: Vec<Uuid> = api
        .all()
        .iter()
        .filter(|r| r.id.simple().to_string().starts_with(&needle))
        .map(|r| r.id)
        .collect();

    match matches.as_slice() {
        [id] => Ok(*id),
        [] => Err(KhanaError::Api(format!("No recipe matches id '{}'", raw))),
        _ => Err(KhanaError::Api(format!(
            "Id '{}' is ambiguous, give a few more characters",
            raw
        ))),
    }
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{}", prompt);
    io::stdout().flush().map_err(KhanaError::Io)?;

    let mut answer = String::new();
    io::stdin()
        .lock()
        .read_line(&mut answer)
        .map_err(KhanaError::Io)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
