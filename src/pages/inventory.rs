//! Inventory View
//!
//! Filterable item table with row selection, batch actions and the
//! add/edit dialog.

use chrono::NaiveDate;
use leptos::prelude::*;

use crate::components::{CategorySelector, DeleteConfirmButton, Modal, SearchInput, UnitSelector};
use crate::context::use_app_context;
use crate::error::FormError;
use crate::filter::{CategoryFilter, InventoryFilter, StatusFilter};
use crate::fixtures;
use crate::models::{InventoryItem, StockStatus};
use crate::selection::{run_batch, BatchAction, Selection};
use crate::validation::{parse_amount, require_non_empty};

fn expiry_label(item: &InventoryItem) -> String {
    if item.is_expiring() {
        return "Expires soon".to_string();
    }
    item.expiry_date
        .map(|d| d.format("%-m/%-d/%Y").to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

fn format_quantity(quantity: f64) -> String {
    if quantity.fract() == 0.0 {
        format!("{:.0}", quantity)
    } else {
        quantity.to_string()
    }
}

#[component]
pub fn InventoryPage() -> impl IntoView {
    let ctx = use_app_context();

    let (items, set_items) = signal(fixtures::load_or_default(fixtures::inventory_items()));
    let (query, set_query) = signal(String::new());
    let (category, set_category) = signal(String::new());
    let (status, set_status) = signal(StatusFilter::All);
    let (selection, set_selection) = signal(Selection::new());

    let filter = Memo::new(move |_| InventoryFilter {
        query: query.get(),
        category: CategoryFilter::from_label(&category.get()),
        status: status.get(),
    });
    let filtered = Memo::new(move |_| items.with(|all| filter.get().apply(all)));
    let visible_ids = move || filtered.with(|rows| rows.iter().map(|i| i.id).collect::<Vec<_>>());

    // Dialog state
    let (dialog_open, set_dialog_open) = signal(false);
    let (editing, set_editing) = signal(None::<u32>);
    let (name, set_name) = signal(String::new());
    let (quantity, set_quantity) = signal(String::new());
    let (unit, set_unit) = signal("pieces".to_string());
    let (item_category, set_item_category) = signal(String::new());
    let (expiry, set_expiry) = signal(String::new());
    let (reorder, set_reorder) = signal(String::new());

    let open_add = move || {
        set_editing.set(None);
        set_name.set(String::new());
        set_quantity.set(String::new());
        set_unit.set("pieces".to_string());
        set_item_category.set(String::new());
        set_expiry.set(String::new());
        set_reorder.set(String::new());
        set_dialog_open.set(true);
    };

    let open_edit = move |item: &InventoryItem| {
        set_editing.set(Some(item.id));
        set_name.set(item.name.clone());
        set_quantity.set(format_quantity(item.quantity));
        set_unit.set(item.unit.clone());
        set_item_category.set(item.category.clone());
        set_expiry.set(item.expiry_date.map(|d| d.to_string()).unwrap_or_default());
        set_reorder.set(format_quantity(item.reorder_point));
        set_dialog_open.set(true);
    };

    let close_dialog = move || {
        set_dialog_open.set(false);
        set_editing.set(None);
    };

    let save_item = move || {
        let editing_id = editing.get_untracked();
        let raw_name = name.get_untracked();
        let Some(item_name) = ctx.settle(require_non_empty("Item name", &raw_name).map(str::to_string), |_| {
            let done = if editing_id.is_some() { "updated" } else { "added" };
            format!("Item {} successfully", done)
        }) else {
            return;
        };
        let expiry_date = NaiveDate::parse_from_str(expiry.get_untracked().trim(), "%Y-%m-%d").ok();
        let draft = InventoryItem {
            id: 0,
            name: item_name,
            category: item_category.get_untracked(),
            quantity: parse_amount(&quantity.get_untracked()).unwrap_or(0.0),
            unit: unit.get_untracked(),
            expiry_date,
            reorder_point: parse_amount(&reorder.get_untracked()).unwrap_or(0.0),
            status: StockStatus::Ok,
        };

        match editing_id {
            Some(id) => {
                tracing::debug!(id, name = %draft.name, "update item");
                set_items.update(|all| {
                    if let Some(existing) = all.iter_mut().find(|i| i.id == id) {
                        *existing = InventoryItem { id, status: existing.status, ..draft };
                    }
                });
            }
            None => {
                tracing::debug!(name = %draft.name, "add item");
                set_items.update(|all| {
                    let id = all.iter().map(|i| i.id).max().unwrap_or(0) + 1;
                    all.push(InventoryItem { id, ..draft });
                });
            }
        }
        close_dialog();
    };

    let restock = move |id: u32| {
        tracing::debug!(id, "restock item");
        ctx.success("Item restocked");
    };

    let add_to_shopping_list = move |id: u32| {
        tracing::debug!(id, "add item to shopping list");
        ctx.success("Item added to shopping list");
    };

    let delete_item = move |id: u32| {
        tracing::debug!(id, "delete item");
        set_items.update(|all| all.retain(|i| i.id != id));
        set_selection.update(|s| {
            if s.contains(id) {
                s.toggle(id);
            }
        });
        ctx.success("Item deleted");
    };

    let batch = move |action: BatchAction| {
        let ids: Vec<u32> = selection.with_untracked(|s| s.ids().collect());
        let mut current = selection.get_untracked();
        let outcome = run_batch(&mut current, action).ok_or(FormError::NothingSelected);
        if ctx.settle(outcome, String::clone).is_some() {
            if action == BatchAction::Delete {
                set_items.update(|all| all.retain(|i| !ids.contains(&i.id)));
            }
            set_selection.set(current);
        }
    };

    let dialog_title = Signal::derive(move || {
        if editing.get().is_some() { "Edit Item".to_string() } else { "Add New Item".to_string() }
    });
    let dialog_description = Signal::derive(move || {
        if editing.get().is_some() {
            "Update the details of your inventory item.".to_string()
        } else {
            "Add a new item to your inventory.".to_string()
        }
    });

    view! {
        <div class="page">
            <div class="page-header">
                <div>
                    <h2 class="page-title">"Inventory"</h2>
                    <p class="muted">"Manage your inventory items"</p>
                </div>
                <button class="btn primary" on:click=move |_| open_add()>"＋ Add Item"</button>
            </div>

            <Modal
                open=dialog_open
                title=dialog_title
                description=dialog_description
                on_close=move |_| close_dialog()
            >
                <form class="form" on:submit=move |ev| {
                    ev.prevent_default();
                    save_item();
                }>
                    <label class="field">
                        <span>"Item Name"</span>
                        <input
                            class="input"
                            placeholder="Enter item name"
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                        />
                    </label>
                    <div class="form-row">
                        <label class="field">
                            <span>"Quantity"</span>
                            <input
                                class="input"
                                type="number"
                                min="0"
                                step="any"
                                placeholder="0"
                                prop:value=move || quantity.get()
                                on:input=move |ev| set_quantity.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="field">
                            <span>"Unit"</span>
                            <UnitSelector id="item-unit" current_unit=unit on_change=move |u| set_unit.set(u) />
                        </label>
                    </div>
                    <label class="field">
                        <span>"Category"</span>
                        <CategorySelector
                            id="item-category"
                            current=item_category
                            on_change=move |c| set_item_category.set(c)
                        />
                    </label>
                    <div class="form-row">
                        <label class="field">
                            <span>"Expiry Date"</span>
                            <input
                                class="input"
                                type="date"
                                prop:value=move || expiry.get()
                                on:input=move |ev| set_expiry.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="field">
                            <span>"Reorder Point"</span>
                            <input
                                class="input"
                                type="number"
                                min="0"
                                step="any"
                                placeholder="0"
                                prop:value=move || reorder.get()
                                on:input=move |ev| set_reorder.set(event_target_value(&ev))
                            />
                        </label>
                    </div>
                    <div class="modal-footer">
                        <button type="button" class="btn outline" on:click=move |_| close_dialog()>"Cancel"</button>
                        <button type="submit" class="btn primary">
                            {move || if editing.get().is_some() { "Update Item" } else { "Add Item" }}
                        </button>
                    </div>
                </form>
            </Modal>

            <div class="card">
                <div class="card-header">
                    <div class="toolbar">
                        <SearchInput placeholder="Search inventory..." value=query set_value=set_query />
                        <CategorySelector
                            id="filter-category"
                            current=category
                            on_change=move |c| set_category.set(c)
                            any_label="All Categories"
                        />
                        <select
                            class="select"
                            aria-label="Filter by Status"
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                let picked = StatusFilter::ALL
                                    .into_iter()
                                    .find(|s| s.label() == value)
                                    .unwrap_or_default();
                                set_status.set(picked);
                            }
                        >
                            {StatusFilter::ALL.into_iter().map(|s| view! {
                                <option value=s.label() selected=move || status.get() == s>{s.label()}</option>
                            }).collect_view()}
                        </select>
                    </div>
                </div>

                <div class="card-content">
                    <Show when=move || !selection.with(|s| s.is_empty())>
                        <div class="batch-bar">
                            <div class="small">
                                <strong>{move || selection.with(|s| s.len())}</strong>
                                " items selected"
                            </div>
                            <div class="row">
                                <button class="btn ghost small" on:click=move |_| batch(BatchAction::Restock)>
                                    "↻ Restock"
                                </button>
                                <button class="btn ghost small" on:click=move |_| batch(BatchAction::AddToShoppingList)>
                                    "🛒 Add to List"
                                </button>
                                <button class="btn ghost small destructive" on:click=move |_| batch(BatchAction::Delete)>
                                    "🗑 Delete"
                                </button>
                            </div>
                        </div>
                    </Show>

                    <table class="table">
                        <thead>
                            <tr>
                                <th class="check-col">
                                    <input
                                        type="checkbox"
                                        aria-label="Select all"
                                        prop:checked=move || selection.with(|s| s.is_all_selected(&visible_ids()))
                                        on:change=move |_| {
                                            let visible = visible_ids();
                                            set_selection.update(|s| s.toggle_all(&visible));
                                        }
                                    />
                                </th>
                                <th>"Name"</th>
                                <th>"Category"</th>
                                <th>"Quantity"</th>
                                <th>"Status"</th>
                                <th class="right">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <Show when=move || filtered.with(|rows| rows.is_empty())>
                                <tr>
                                    <td colspan="6" class="empty">
                                        {move || {
                                            if filter.with(|f| f.is_active()) {
                                                "No items match your filters"
                                            } else {
                                                "No items in inventory. Add some items to get started!"
                                            }
                                        }}
                                    </td>
                                </tr>
                            </Show>
                            <For
                                each=move || filtered.get()
                                key=InventoryItem::row_key
                                children=move |item| {
                                    let id = item.id;
                                    let low = item.is_low_stock();
                                    let expiring = item.is_expiring();
                                    let edit_target = item.clone();
                                    view! {
                                        <tr class=if low { "row low-stock" } else { "row" }>
                                            <td class="check-col">
                                                <input
                                                    type="checkbox"
                                                    aria-label=format!("Select {}", item.name)
                                                    prop:checked=move || selection.with(|s| s.contains(id))
                                                    on:change=move |_| set_selection.update(|s| s.toggle(id))
                                                />
                                            </td>
                                            <td class="strong">{item.name.clone()}</td>
                                            <td><span class="badge badge-outline">{item.category.clone()}</span></td>
                                            <td>
                                                <span class=if low { "strong warning" } else { "strong" }>
                                                    {format!("{} {}", format_quantity(item.quantity), item.unit)}
                                                </span>
                                                <Show when=move || low>
                                                    <span class="warning" title="Low stock">" ⚠"</span>
                                                </Show>
                                            </td>
                                            <td class=if expiring { "danger" } else { "muted" }>
                                                {if expiring { "⏰ " } else { "" }}
                                                {expiry_label(&item)}
                                            </td>
                                            <td class="right row-actions">
                                                <button class="btn ghost icon" title="Restock" on:click=move |_| restock(id)>
                                                    "↻"
                                                </button>
                                                <button class="menu-item" on:click=move |_| open_edit(&edit_target)>
                                                    "Edit"
                                                </button>
                                                <button class="menu-item" on:click=move |_| add_to_shopping_list(id)>
                                                    "Add to Shopping List"
                                                </button>
                                                <DeleteConfirmButton label="Delete" on_confirm=move |_| delete_item(id) />
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}
