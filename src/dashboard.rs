//! Dashboard view model: user statistics and recent recipe cards.

use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Invalid dashboard payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub meals_planned: u32,
    pub recipes_tried: u32,
    /// Preformatted, e.g. `"85%"`.
    pub healthy_meals: String,
    /// Preformatted, e.g. `"$45"`.
    pub money_saved: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSummary {
    pub id: u64,
    pub name: String,
    pub image: String,
    /// Preparation time, e.g. `"15 mins"`.
    pub time: String,
    pub rating: f32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    pub name: String,
    pub stats: UserStats,
    #[serde(default)]
    pub recent_recipes: Vec<RecipeSummary>,
}

impl UserData {
    /// Parses the JSON payload served for the dashboard page.
    pub fn from_json(payload: &str) -> Result<Self, DashboardError> {
        Ok(serde_json::from_str(payload)?)
    }
}

/// Text slots on the dashboard page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DashboardSlot {
    UserName,
    MealsPlanned,
    RecipesTried,
    HealthyMeals,
    MoneySaved,
}

/// Dashboard page elements.
pub trait DashboardView {
    fn set_text(&mut self, slot: DashboardSlot, text: &str);
    /// Replaces the recipe grid content with `html`.
    fn set_recipe_grid(&mut self, html: &str);
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn render_recipe_card(recipe: &RecipeSummary) -> String {
    format!(
        concat!(
            r#"<div class="recipe-card" data-recipe-id="{id}">"#,
            r#"<div class="recipe-image" style="background-image: url(&quot;{image}&quot;)"></div>"#,
            r#"<div class="recipe-info">"#,
            r#"<h3>{name}</h3>"#,
            r#"<div class="recipe-meta">"#,
            r#"<span><i class="fas fa-clock"></i> {time}</span>"#,
            r#"<span><i class="fas fa-star"></i> {rating}</span>"#,
            r#"</div></div></div>"#,
        ),
        id = recipe.id,
        image = escape_html(&recipe.image),
        name = escape_html(&recipe.name),
        time = escape_html(&recipe.time),
        rating = recipe.rating,
    )
}

pub fn render_recipe_grid(recipes: &[RecipeSummary]) -> String {
    recipes.iter().map(render_recipe_card).collect()
}

/// Fills the dashboard from `data`.
///
/// The recipe grid is left untouched when there are no recent recipes.
pub fn load_user_data<V: DashboardView + ?Sized>(view: &mut V, data: &UserData) {
    view.set_text(DashboardSlot::UserName, &data.name);
    view.set_text(DashboardSlot::MealsPlanned, &data.stats.meals_planned.to_string());
    view.set_text(DashboardSlot::RecipesTried, &data.stats.recipes_tried.to_string());
    view.set_text(DashboardSlot::HealthyMeals, &data.stats.healthy_meals);
    view.set_text(DashboardSlot::MoneySaved, &data.stats.money_saved);

    if !data.recent_recipes.is_empty() {
        view.set_recipe_grid(&render_recipe_grid(&data.recent_recipes));
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(recipes = data.recent_recipes.len(), "dashboard loaded");
}
