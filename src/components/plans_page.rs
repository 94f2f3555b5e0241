use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::hooks::{use_auth, use_mounted};
use crate::models::{Plan, PlanInput, PlanType};
use crate::services::plan_service;

/// Plan editor contents exactly as typed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanForm {
    pub name: String,
    pub price: String,
    pub duration: String,
    pub features: String,
    pub plan_type: String,
}

impl PlanForm {
    pub fn from_plan(plan: &Plan) -> Self {
        Self {
            name: plan.name.clone(),
            price: plan.price.to_string(),
            duration: plan.duration.clone().unwrap_or_default(),
            features: plan.features.join(", "),
            plan_type: match plan.plan_type {
                Some(PlanType::Vendor) => "vendor".to_string(),
                Some(PlanType::Customer) => "customer".to_string(),
                None => String::new(),
            },
        }
    }

    pub fn to_input(&self) -> Result<PlanInput, &'static str> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Plan name is required");
        }
        let price = self
            .price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite() && *p >= 0.0)
            .ok_or("Price must be a non-negative number")?;
        let plan_type = match self.plan_type.as_str() {
            "customer" => PlanType::Customer,
            "vendor" => PlanType::Vendor,
            _ => return Err("Choose who the plan is for"),
        };

        Ok(PlanInput {
            name: name.to_string(),
            price,
            duration: self.duration.trim().to_string(),
            features: PlanInput::parse_features(&self.features),
            plan_type,
        })
    }
}

#[function_component(PlansPage)]
pub fn plans_page() -> Html {
    let auth = use_auth();
    let mounted = use_mounted();
    let plans = use_state(|| None::<Vec<Plan>>);
    let error = use_state(|| None::<String>);
    let form = use_state(PlanForm::default);
    let editing = use_state(|| None::<String>);
    let revision = use_state(|| 0u32);

    {
        let client = auth.manager.client().clone();
        let mounted = mounted.clone();
        let plans = plans.clone();
        let error = error.clone();
        use_effect_with(*revision, move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let result = plan_service::get_all(&client).await;
                if !mounted.is_mounted() {
                    return;
                }
                match result.into_result() {
                    Ok(loaded) => plans.set(Some(loaded)),
                    Err(e) => error.set(Some(e.to_string())),
                }
            });
        });
    }

    let text_field = |apply: fn(&mut PlanForm, String)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            apply(&mut next, input.value());
            form.set(next);
        })
    };

    let on_plan_type = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            form.set(PlanForm {
                plan_type: select.value(),
                ..(*form).clone()
            });
        })
    };

    let on_submit = {
        let client = auth.manager.client().clone();
        let mounted = mounted.clone();
        let error = error.clone();
        let form = form.clone();
        let editing = editing.clone();
        let revision = revision.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let input = match form.to_input() {
                Ok(input) => input,
                Err(message) => {
                    error.set(Some(message.to_string()));
                    return;
                }
            };

            error.set(None);
            let client = client.clone();
            let mounted = mounted.clone();
            let error = error.clone();
            let form = form.clone();
            let editing = editing.clone();
            let revision = revision.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = match (*editing).clone() {
                    Some(id) => plan_service::update(&client, &id, &input).await,
                    None => plan_service::create(&client, &input).await,
                };
                if !mounted.is_mounted() {
                    return;
                }
                match result.error() {
                    Some(message) => error.set(Some(message)),
                    None => {
                        form.set(PlanForm::default());
                        editing.set(None);
                        revision.set(*revision + 1);
                    }
                }
            });
        })
    };

    let on_delete = {
        let client = auth.manager.client().clone();
        let error = error.clone();
        let revision = revision.clone();
        Callback::from(move |id: String| {
            let client = client.clone();
            let mounted = mounted.clone();
            let error = error.clone();
            let revision = revision.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = plan_service::delete(&client, &id).await;
                if !mounted.is_mounted() {
                    return;
                }
                match result.error() {
                    Some(message) => error.set(Some(message)),
                    None => revision.set(*revision + 1),
                }
            });
        })
    };

    let cards = (*plans).clone().unwrap_or_default().into_iter().map(|plan| {
        let on_edit = {
            let form = form.clone();
            let editing = editing.clone();
            let plan = plan.clone();
            Callback::from(move |_: MouseEvent| {
                form.set(PlanForm::from_plan(&plan));
                editing.set(Some(plan.id.clone()));
            })
        };
        let on_remove = {
            let on_delete = on_delete.clone();
            let id = plan.id.clone();
            Callback::from(move |_: MouseEvent| on_delete.emit(id.clone()))
        };
        html! {
            <div class="plan-card" key={plan.id.clone()}>
                <h3>{plan.name.clone()}</h3>
                <p class="plan-price">{format!("₹{:.2}", plan.price)}</p>
                <p class="plan-duration">{plan.duration.clone().unwrap_or_default()}</p>
                <ul>
                    { for plan.features.iter().map(|f| html! { <li>{f.clone()}</li> }) }
                </ul>
                <button class="btn-edit" onclick={on_edit}>{"Edit"}</button>
                <button class="btn-delete" onclick={on_remove}>{"Delete"}</button>
            </div>
        }
    });

    html! {
        <section class="plans-page">
            <form class="plan-form" onsubmit={on_submit}>
                <h2>{ if editing.is_some() { "Update Existing Plan" } else { "Add New Plan" } }</h2>
                <input
                    placeholder="Enter plan name"
                    value={form.name.clone()}
                    oninput={text_field(|f, v| f.name = v)}
                />
                <input
                    type="number"
                    placeholder="Enter price"
                    value={form.price.clone()}
                    oninput={text_field(|f, v| f.price = v)}
                />
                <input
                    placeholder="Enter duration (ex: 1 month)"
                    value={form.duration.clone()}
                    oninput={text_field(|f, v| f.duration = v)}
                />
                <input
                    placeholder="Features, separated by commas"
                    value={form.features.clone()}
                    oninput={text_field(|f, v| f.features = v)}
                />
                <select onchange={on_plan_type}>
                    <option value="" selected={form.plan_type.is_empty()}>{"Plan for..."}</option>
                    <option value="customer" selected={form.plan_type == "customer"}>{"Customer"}</option>
                    <option value="vendor" selected={form.plan_type == "vendor"}>{"Vendor"}</option>
                </select>
                <button type="submit">{ if editing.is_some() { "Update Plan" } else { "Create Plan" } }</button>
            </form>

            if let Some(message) = (*error).clone() {
                <div class="panel-error" role="alert">{message}</div>
            }

            if (*plans).is_none() {
                <div class="spinner"></div>
            } else {
                <div class="plan-grid">{for cards}</div>
            }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn filled() -> PlanForm {
        PlanForm {
            name: " Gold ".to_string(),
            price: "499".to_string(),
            duration: "1 month".to_string(),
            features: "spa, gym,".to_string(),
            plan_type: "customer".to_string(),
        }
    }

    #[rstest]
    fn filled_form_becomes_input() {
        let input = filled().to_input().unwrap();
        assert_eq!(input.name, "Gold");
        assert_eq!(input.price, 499.0);
        assert_eq!(input.features, vec!["spa", "gym"]);
        assert_eq!(input.plan_type, PlanType::Customer);
    }

    #[rstest]
    #[case(PlanForm { name: "  ".to_string(), ..filled() }, "Plan name is required")]
    #[case(PlanForm { price: "ten".to_string(), ..filled() }, "Price must be a non-negative number")]
    #[case(PlanForm { price: "-1".to_string(), ..filled() }, "Price must be a non-negative number")]
    #[case(PlanForm { plan_type: String::new(), ..filled() }, "Choose who the plan is for")]
    fn incomplete_form_is_rejected(#[case] form: PlanForm, #[case] message: &str) {
        assert_eq!(form.to_input(), Err(message));
    }

    #[rstest]
    fn editing_a_plan_prefills_the_form() {
        let plan = Plan {
            id: "p1".to_string(),
            name: "Vendor Pro".to_string(),
            price: 999.5,
            duration: Some("1 year".to_string()),
            features: vec!["Leads".to_string(), "Badge".to_string()],
            plan_type: Some(PlanType::Vendor),
            active: true,
            created_at: None,
            updated_at: None,
        };

        let form = PlanForm::from_plan(&plan);

        assert_eq!(form.features, "Leads, Badge");
        assert_eq!(form.plan_type, "vendor");
        assert_eq!(form.to_input().unwrap().price, 999.5);
    }
}
