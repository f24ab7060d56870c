//! Categories View
//!
//! Searchable category cards with the add/edit dialog and colour picker.

use leptos::prelude::*;

use crate::components::{ColorPicker, DeleteConfirmButton, Modal, SearchInput, COLORS};
use crate::context::use_app_context;
use crate::filter::filter_by_name;
use crate::fixtures;
use crate::models::Category;
use crate::validation::require_non_empty;

fn default_color() -> String {
    COLORS[0].1.to_string()
}

/// Category card grid with the add/edit dialog
#[component]
pub fn CategoriesPage() -> impl IntoView {
    let ctx = use_app_context();

    let (categories, set_categories) = signal(fixtures::load_or_default(fixtures::categories()));
    let (query, set_query) = signal(String::new());
    let filtered = Memo::new(move |_| categories.with(|all| filter_by_name(all, &query.get())));

    let (dialog_open, set_dialog_open) = signal(false);
    let (editing, set_editing) = signal(None::<u32>);
    let (name, set_name) = signal(String::new());
    let (color, set_color) = signal(default_color());

    let reset_dialog = move || {
        set_dialog_open.set(false);
        set_editing.set(None);
        set_name.set(String::new());
        set_color.set(default_color());
    };

    let open_edit = move |category: &Category| {
        set_editing.set(Some(category.id));
        set_name.set(category.name.clone());
        set_color.set(category.color.clone());
        set_dialog_open.set(true);
    };

    let save = move || {
        let editing_id = editing.get_untracked();
        let raw = name.get_untracked();
        let Some(category_name) = ctx.settle(
            require_non_empty("Category name", &raw).map(str::to_string),
            |n| match editing_id {
                Some(_) => format!("Category \"{}\" updated", n),
                None => format!("Category \"{}\" added", n),
            },
        ) else {
            return;
        };
        let chosen = color.get_untracked();
        match editing_id {
            Some(id) => set_categories.update(|all| {
                if let Some(existing) = all.iter_mut().find(|c| c.id == id) {
                    existing.name = category_name;
                    existing.color = chosen;
                }
            }),
            None => set_categories.update(|all| {
                let id = all.iter().map(|c| c.id).max().unwrap_or(0) + 1;
                all.push(Category {
                    id,
                    name: category_name,
                    color: chosen,
                    item_count: 0,
                });
            }),
        }
        reset_dialog();
    };

    let delete = move |id: u32| {
        tracing::debug!(id, "delete category");
        set_categories.update(|all| all.retain(|c| c.id != id));
        ctx.success("Category deleted");
    };

    view! {
        <div class="page">
            <div class="page-header">
                <div>
                    <h2 class="page-title">"Categories"</h2>
                    <p class="muted">"Organize your inventory with categories"</p>
                </div>
                <button class="btn primary" on:click=move |_| set_dialog_open.set(true)>"＋ Add Category"</button>
            </div>

            <Modal
                open=dialog_open
                title=Signal::derive(move || {
                    if editing.get().is_some() { "Edit Category".to_string() } else { "Add New Category".to_string() }
                })
                description=Signal::derive(move || {
                    if editing.get().is_some() {
                        "Update your category details".to_string()
                    } else {
                        "Create a new category to organize your inventory".to_string()
                    }
                })
                on_close=move |_| reset_dialog()
            >
                <form class="form" on:submit=move |ev| {
                    ev.prevent_default();
                    save();
                }>
                    <label class="field">
                        <span>"Category Name"</span>
                        <input
                            id="categoryName"
                            class="input"
                            placeholder="Enter category name"
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                        />
                    </label>
                    <div class="field">
                        <span>"Color"</span>
                        <ColorPicker selected=color on_change=move |c| set_color.set(c) />
                    </div>
                    <div class="modal-footer">
                        <button type="button" class="btn outline" on:click=move |_| reset_dialog()>"Cancel"</button>
                        <button type="submit" class="btn primary">
                            {move || if editing.get().is_some() { "Save Changes" } else { "Add Category" }}
                        </button>
                    </div>
                </form>
            </Modal>

            <div class="card">
                <div class="card-header row between">
                    <h3 class="card-title">"All Categories"</h3>
                    <SearchInput placeholder="Search categories..." value=query set_value=set_query />
                </div>
                <div class="card-content">
                    <div class="grid cards">
                        <Show when=move || filtered.with(|c| c.is_empty())>
                            <div class="empty full-span">"No categories found"</div>
                        </Show>
                        <For
                            each=move || filtered.get()
                            key=|c: &Category| (c.id, c.name.clone(), c.color.clone())
                            children=move |category| {
                                let id = category.id;
                                let target = category.clone();
                                view! {
                                    <div class="category-card">
                                        <div
                                            class="category-icon"
                                            style=format!("background-color: {}20; color: {};", category.color, category.color)
                                        >
                                            "📦"
                                        </div>
                                        <h3 class="category-name">{category.name.clone()}</h3>
                                        <p class="muted small">{format!("{} items", category.item_count)}</p>
                                        <div class="card-actions">
                                            <button class="menu-item" on:click=move |_| open_edit(&target)>"✎ Edit"</button>
                                            <DeleteConfirmButton label="🗑 Delete" on_confirm=move |_| delete(id) />
                                        </div>
                                    </div>
                                }
                            }
                        />
                    </div>
                </div>
            </div>
        </div>
    }
}
