use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    pub id: AttrValue,
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Section)]
pub fn section(props: &SectionProps) -> Html {
    html! {
        <section id={props.id.clone()} class="page-section">
            <div class="container">
                <div class="section-heading" data-reveal="">
                    <h2>{props.title.clone()}</h2>
                    {
                        if let Some(subtitle) = &props.subtitle {
                            html! { <p class="section-subtitle">{subtitle.clone()}</p> }
                        } else {
                            html! {}
                        }
                    }
                </div>
                <div class="section-body">{ for props.children.iter() }</div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatProps {
    pub label: AttrValue,
    pub value: AttrValue,
}

#[function_component(Stat)]
pub fn stat(props: &StatProps) -> Html {
    html! {
        <div class="card stat" data-reveal="">
            <div class="stat-value">{props.value.clone()}</div>
            <div class="stat-label">{props.label.clone()}</div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PillProps {
    pub text: AttrValue,
}

#[function_component(Pill)]
pub fn pill(props: &PillProps) -> Html {
    html! {
        <span class="pill" data-reveal="">{props.text.clone()}</span>
    }
}

#[derive(Properties, PartialEq)]
pub struct StepProps {
    pub title: AttrValue,
    pub text: AttrValue,
}

#[function_component(Step)]
pub fn step(props: &StepProps) -> Html {
    html! {
        <li class="card card-hover" data-reveal="">
            <div class="card-title">{props.title.clone()}</div>
            <div class="card-text">{props.text.clone()}</div>
        </li>
    }
}

#[derive(Properties, PartialEq)]
pub struct CardProps {
    pub title: AttrValue,
    pub items: Vec<&'static str>,
}

#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    html! {
        <div class="card card-hover" data-reveal="">
            <h3 class="card-title">{props.title.clone()}</h3>
            <ul class="card-list">
                { for props.items.iter().map(|item| html! { <li>{*item}</li> }) }
            </ul>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct RoadmapCardProps {
    pub phase: AttrValue,
    pub bullets: Vec<&'static str>,
}

#[function_component(RoadmapCard)]
pub fn roadmap_card(props: &RoadmapCardProps) -> Html {
    html! {
        <div class="card" data-reveal="">
            <div class="card-eyebrow">{props.phase.clone()}</div>
            <ul class="card-list">
                { for props.bullets.iter().map(|bullet| html! { <li>{*bullet}</li> }) }
            </ul>
        </div>
    }
}

pub fn initials(name: &str) -> String {
    name.split_whitespace().filter_map(|part| part.chars().next()).collect()
}

#[derive(Properties, PartialEq)]
pub struct FounderCardProps {
    pub name: AttrValue,
    pub role: AttrValue,
}

#[function_component(FounderCard)]
pub fn founder_card(props: &FounderCardProps) -> Html {
    html! {
        <div class="card card-hover founder" data-reveal="">
            <div class="founder-avatar">{initials(&props.name)}</div>
            <div>
                <div class="card-title">{props.name.clone()}</div>
                <div class="card-text">{props.role.clone()}</div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::initials;

    #[test]
    fn founder_initials() {
        assert_eq!(initials("Emery Frazier"), "EF");
        assert_eq!(initials("Muhammad Saad Khalil"), "MSK");
        assert_eq!(initials("  "), "");
    }
}
