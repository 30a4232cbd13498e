use super::view_model::AskAnalystViewModel;
use crate::config;
use crate::shared::components::ui::{Button, Input, Textarea};
use crate::shared::components::{FeatureTile, FileDropZone};
use crate::shared::icons::icon;
use crate::shared::toast::use_toasts;
use crate::shared::viewport::use_viewport_class;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u101_ask_analyst::request::ACCEPTED_EXTENSIONS;
use contracts::usecases::u101_ask_analyst::AskAnalyst;
use leptos::prelude::*;
use thaw::{Spinner, SpinnerSize};

#[component]
pub fn AskAnalystPage() -> impl IntoView {
    let settings = config::settings();
    let vm = AskAnalystViewModel::new(settings.form.collect_email, use_toasts());
    let viewport = use_viewport_class(settings.narrow_breakpoint());
    let preset = move || viewport.get().style_preset();

    let can_submit = vm.can_submit();
    let is_submitting = vm.is_submitting;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit_command(settings);
    };

    view! {
        <div class="landing" style:padding=move || preset().page_padding>
            <div class="landing__container">
                <header class="landing__header">
                    <div class="landing__logo">{icon("brain")}</div>
                    <h1 class="landing__title" style:font-size=move || preset().title_font_size>
                        {AskAnalyst::display_name()}
                    </h1>
                    <p class="landing__subtitle">{AskAnalyst::description()}</p>
                </header>

                <div class="glass-card" style:padding=move || preset().card_padding>
                    <form id=AskAnalyst::full_name() class="analyst-form" on:submit=on_submit>
                        <div class="form__group">
                            <label class="form__label" for="file-upload">
                                "Upload your data file"
                            </label>
                            <FileDropZone
                                id="file-upload"
                                accept=ACCEPTED_EXTENSIONS
                                file_name=vm.file_name()
                                on_select=Callback::new(move |file: web_sys::File| vm.select_file(file))
                                hint="Supports CSV, Excel, JSON, and text files"
                                disabled=Signal::derive(move || is_submitting.get())
                            />
                        </div>

                        <Textarea
                            id="question"
                            label="What would you like to know about your data?"
                            placeholder="E.g., What are the key trends in my sales data? Which factors correlate with customer satisfaction?"
                            value=vm.question
                            on_input=Callback::new(move |text: String| vm.question.set(text))
                            rows=4
                            disabled=Signal::derive(move || is_submitting.get())
                        />

                        <Show when=move || vm.collect_email>
                            <Input
                                id="email"
                                label="Your email"
                                input_type="email"
                                autocomplete="email"
                                placeholder="you@company.com"
                                value=vm.email
                                on_input=Callback::new(move |text: String| vm.email.set(text))
                                disabled=Signal::derive(move || is_submitting.get())
                            />
                        </Show>

                        <Button
                            button_type="submit"
                            block=true
                            class="analyst-form__submit"
                            disabled=Signal::derive(move || !can_submit())
                            busy=Signal::derive(move || is_submitting.get())
                        >
                            {move || if is_submitting.get() {
                                view! {
                                    <span class="button__content">
                                        <Spinner size=SpinnerSize::Small />
                                        "Analyzing..."
                                    </span>
                                }.into_any()
                            } else {
                                view! {
                                    <span class="button__content">
                                        {icon("bar-chart")}
                                        "Analyze Data"
                                    </span>
                                }.into_any()
                            }}
                        </Button>
                    </form>
                </div>

                <section class=move || {
                    if viewport.get().is_narrow() { "features features--stacked" } else { "features" }
                }>
                    <FeatureTile
                        icon_name="upload"
                        title="Easy Upload"
                        caption="Support for multiple file formats"
                    />
                    <FeatureTile
                        icon_name="brain"
                        title="AI-Powered"
                        caption="Advanced analytics and insights"
                    />
                    <FeatureTile
                        icon_name="bar-chart"
                        title="Instant Results"
                        caption="Get answers in seconds"
                    />
                </section>
            </div>
        </div>
    }
}
