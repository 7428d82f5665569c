//! Last wizard step: naming the village.

use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct VillageNameStepProps {
    pub value: AttrValue,
    pub on_change: Callback<String>,
}

#[function_component(VillageNameStep)]
pub fn village_name_step(props: &VillageNameStepProps) -> Html {
    let oninput = props.on_change.reform(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        input.value()
    });

    html! {
        <>
            <h2 class="step-title">{ "Village name" }</h2>
            <div class="suffixed-input">
                <input
                    type="text"
                    value={props.value.clone()}
                    placeholder="Name your village."
                    {oninput}
                />
                <span class="input-suffix">{ "Village" }</span>
            </div>
        </>
    }
}
