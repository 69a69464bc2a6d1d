use chrono::{DateTime, Utc};
use colored::Colorize;
use khana::form::FieldErrors;
use khana::model::{Difficulty, Recipe};
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 16;

pub(super) fn info(content: impl AsRef<str>) {
    println!("{}", content.as_ref().dimmed());
}

pub(super) fn success(content: impl AsRef<str>) {
    println!("{}", content.as_ref().green());
}

pub(super) fn warning(content: impl AsRef<str>) {
    println!("{}", content.as_ref().yellow());
}

pub(super) fn error_line(content: impl AsRef<str>) {
    eprintln!("{}", content.as_ref().red());
}

/// Every violated field is printed, never just the first.
pub(super) fn print_field_errors(errors: &FieldErrors) {
    error_line("Recipe not saved:");
    for (field, message) in errors.iter() {
        eprintln!("  {} {}", format!("{}:", field.label()).red(), message);
    }
}

pub(super) fn short_id(recipe: &Recipe) -> String {
    recipe.id.simple().to_string()[..8].to_string()
}

pub(super) fn print_recipes(recipes: &[&Recipe]) {
    if recipes.is_empty() {
        println!("No recipes found.");
        return;
    }

    for recipe in recipes {
        let id = format!("{}  ", short_id(recipe));
        let meta = format!(
            "{:>6}  {:>10}",
            recipe.difficulty.to_string(),
            format_minutes(recipe.total_time)
        );
        let time_ago = format_time_ago(recipe.updated_at);

        let fixed_width = id.width() + meta.width() + 2 + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let title = truncate_to_width(&recipe.title, available);
        let padding = available.saturating_sub(title.width());

        println!(
            "  {}{}{}  {}{}",
            id.dimmed(),
            title.bold(),
            " ".repeat(padding),
            colored_difficulty(recipe.difficulty, &meta),
            time_ago.dimmed()
        );
    }
}

pub(super) fn print_recipe(recipe: &Recipe) {
    println!("{}  {}", recipe.title.bold(), short_id(recipe).dimmed());
    println!("{}", "-".repeat(recipe.title.width() + 10));
    println!("{}", recipe.description);
    println!();
    println!(
        "{} {}   {} prep {} + cook {}",
        "difficulty:".dimmed(),
        colored_difficulty(recipe.difficulty, &recipe.difficulty.to_string()),
        format_minutes(recipe.total_time).bold(),
        format_minutes(recipe.prep_time),
        format_minutes(recipe.cook_time),
    );
    if !recipe.image_url.is_empty() {
        println!("{} {}", "image:".dimmed(), recipe.image_url);
    }
    println!();
    println!("{}", "Ingredients".bold());
    for ingredient in &recipe.ingredients {
        println!("  - {}", ingredient);
    }
    println!();
    println!("{}", "Steps".bold());
    for (i, step) in recipe.steps.iter().enumerate() {
        println!("  {}. {}", i + 1, step);
    }
    println!();
    println!(
        "{}",
        format!(
            "created {}, edited {}",
            format_time_ago(recipe.created_at).trim(),
            format_time_ago(recipe.updated_at).trim()
        )
        .dimmed()
    );
}

fn colored_difficulty(difficulty: Difficulty, text: &str) -> colored::ColoredString {
    match difficulty {
        Difficulty::Easy => text.green(),
        Difficulty::Medium => text.yellow(),
        Difficulty::Hard => text.red(),
    }
}

/// Minutes in a human-friendly form: "40 min", "1 h", "1 h 20 min".
pub(super) fn format_minutes(min: u32) -> String {
    if min == 0 {
        return "0 min".to_string();
    }
    if min < 60 {
        return format!("{} min", min);
    }
    let h = min / 60;
    let rest = min % 60;
    if rest == 0 {
        format!("{} h", h)
    } else {
        format!("{} h {} min", h, rest)
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(timestamp);

    let formatter = Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
