//! Editable report draft: header fields and expense lines.
//! Used by the upload flow and by the request detail edit mode.

use crate::shared::format::format_amount;
use contracts::domain::a001_travel_request::{Expense, ReportDraft};
use leptos::prelude::*;

/// One text field bound to a draft property
#[component]
fn DraftField(
    label: &'static str,
    id: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    draft: RwSignal<ReportDraft>,
    get: fn(&ReportDraft) -> String,
    set: fn(&mut ReportDraft, String),
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <input
                type=input_type
                id=id
                prop:value=move || draft.with(get)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    draft.update(|d| set(d, value));
                }
            />
        </div>
    }
}

fn update_expense(draft: RwSignal<ReportDraft>, index: usize, apply: impl FnOnce(&mut Expense)) {
    draft.update(|d| {
        if let Some(expense) = d.expenses.get_mut(index) {
            apply(expense);
        }
        d.recalculate_total();
    });
}

#[component]
pub fn ReportDraftForm(draft: RwSignal<ReportDraft>) -> impl IntoView {
    let rows = move || (0..draft.with(|d| d.expenses.len())).collect::<Vec<_>>();

    let add_expense = move |_| {
        draft.update(|d| {
            d.expenses.push(Expense::default());
            d.recalculate_total();
        });
    };

    view! {
        <div class="details-form report-draft">
            <DraftField label="Requester" id="requester" draft=draft
                get=|d| d.requester.clone() set=|d, v| d.requester = v />
            <DraftField label="Department" id="department" draft=draft
                get=|d| d.department.clone() set=|d, v| d.department = v />
            <DraftField label="Position" id="position" draft=draft
                get=|d| d.position.clone() set=|d, v| d.position = v />
            <DraftField label="Start date" id="start_date" input_type="date" draft=draft
                get=|d| d.start_date.clone() set=|d, v| d.start_date = v />
            <DraftField label="End date" id="end_date" input_type="date" draft=draft
                get=|d| d.end_date.clone() set=|d, v| d.end_date = v />

            <h4>"Expenses"</h4>
            <table class="expenses-table">
                <thead>
                    <tr>
                        <th>"Date"</th>
                        <th>"Category"</th>
                        <th>"Description"</th>
                        <th>"Amount"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=rows
                        key=|i| *i
                        children=move |i| {
                            let field = move |f: fn(&Expense) -> String| {
                                move || draft.with(|d| d.expenses.get(i).map(f).unwrap_or_default())
                            };
                            view! {
                                <tr>
                                    <td>
                                        <input type="date"
                                            prop:value=field(|e| e.date.clone())
                                            on:input=move |ev| {
                                                let v = event_target_value(&ev);
                                                update_expense(draft, i, |e| e.date = v);
                                            }
                                        />
                                    </td>
                                    <td>
                                        <input type="text"
                                            prop:value=field(|e| e.category.clone())
                                            on:input=move |ev| {
                                                let v = event_target_value(&ev);
                                                update_expense(draft, i, |e| e.category = v);
                                            }
                                        />
                                    </td>
                                    <td>
                                        <input type="text"
                                            prop:value=field(|e| e.description.clone())
                                            on:input=move |ev| {
                                                let v = event_target_value(&ev);
                                                update_expense(draft, i, |e| e.description = v);
                                            }
                                        />
                                    </td>
                                    <td>
                                        // change, not input: re-rendering the parsed value while typing
                                        // would eat a trailing decimal point
                                        <input type="number" step="0.01" min="0"
                                            prop:value=field(|e| format!("{:.2}", e.amount))
                                            on:change=move |ev| {
                                                let amount = event_target_value(&ev).trim().parse::<f64>().unwrap_or(0.0);
                                                update_expense(draft, i, |e| e.amount = amount);
                                            }
                                        />
                                    </td>
                                    <td>
                                        <button
                                            class="btn btn-secondary"
                                            on:click=move |_| draft.update(|d| {
                                                if i < d.expenses.len() {
                                                    d.expenses.remove(i);
                                                }
                                                d.recalculate_total();
                                            })
                                        >
                                            "Remove"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
            <button class="btn btn-secondary" on:click=add_expense>"Add expense"</button>

            <div class="report-total">
                <strong>"Total: "</strong>
                {move || format_amount(draft.with(|d| d.total_amount))}
            </div>
        </div>
    }
}
