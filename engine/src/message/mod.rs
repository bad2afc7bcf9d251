//! Message template builder
//!
//! Renders one of four fixed client-communication templates with the
//! price-change details filled in. Pure string interpolation: no field
//! validation, no escaping, empty strings are inserted verbatim.
//!
//! Prices pass through [`format_pln`](crate::format_pln); the "zł" unit is
//! part of the template prose. An unknown template key at the string
//! boundary yields a fixed fallback prompting the caller to pick a
//! template.
//!
//! # Example
//!
//! ```
//! use pricing_simulator_core::{render, MessageContext, TemplateStyle};
//!
//! let ctx = MessageContext {
//!     client_name: "Ania".to_string(),
//!     old_price: 150.0,
//!     new_price: 180.0,
//!     package_label: "pakiet 8 treningów".to_string(),
//!     effective_date_new_clients: "1 stycznia".to_string(),
//!     effective_date_existing_clients: "1 marca".to_string(),
//! };
//! let message = render(TemplateStyle::Official, &ctx);
//! assert!(message.contains("Ania"));
//! assert!(message.contains("180 zł"));
//! ```

use crate::core::format::format_pln;
use crate::models::message::{MessageContext, TemplateStyle};

/// Fallback returned for an unknown template key
pub const CHOOSE_TEMPLATE_FALLBACK: &str = "Wybierz szablon.";

/// Render the template named by `style`, falling back for unknown keys
///
/// This is the string-keyed surface the form layer calls; `style` comes
/// straight from a select input.
pub fn build_message(style: &str, ctx: &MessageContext) -> String {
    match style.parse::<TemplateStyle>() {
        Ok(style) => render(style, ctx),
        Err(_) => CHOOSE_TEMPLATE_FALLBACK.to_string(),
    }
}

/// Render a known template
pub fn render(style: TemplateStyle, ctx: &MessageContext) -> String {
    let name = ctx.client_name.as_str();
    let old_price = format_pln(ctx.old_price);
    let new_price = format_pln(ctx.new_price);
    let package = ctx.package_label.as_str();
    let start_date = ctx.effective_date_new_clients.as_str();
    let grace_date = ctx.effective_date_existing_clients.as_str();

    match style {
        TemplateStyle::Sandwich => format!(
            "Cześć {name},\n\
             Na początku chcę Ci bardzo podziękować za dotychczasową współpracę. Widzę, \
             jak przez ostatnie miesiące poprawiła się Twoja forma i mega mnie to cieszy \
             – to w dużej mierze Twoja zasługa.\n\n\
             Piszę, bo od {start_date} aktualizuję cennik moich usług.\n\
             Cena za {package} wzrośnie z {old_price} zł do {new_price} zł.\n\n\
             Dzięki tej zmianie mogę dalej inwestować w sprzęt, szkolenia i narzędzia, \
             które przekładają się na szybsze i lepsze efekty moich podopiecznych.\n\n\
             Ponieważ jesteś stałym klientem, chcę, żebyś na tym zyskał(-a):\n\
             – dla Ciebie nowa cena zacznie obowiązywać dopiero od {grace_date}\n\
             ALBO\n\
             – możesz jeszcze do końca miesiąca wykupić kolejny pakiet w starej cenie.\n\n\
             Jeśli masz jakiekolwiek pytania – śmiało pisz.\n\
             Działamy dalej i robimy formę. 💪"
        ),
        TemplateStyle::Official => format!(
            "Szanowny/a {name},\n\
             dziękuję za dotychczasową współpracę i zaufanie, jakim mnie obdarzasz.\n\n\
             W celu utrzymania wysokiej jakości usług oraz dalszego rozwoju zaplecza \
             merytorycznego i sprzętowego, od {start_date} aktualizuję cennik.\n\
             Nowa cena za {package} będzie wynosić {new_price} zł (dotychczas: {old_price} zł).\n\n\
             Zmiana ta pozwoli mi nadal zapewniać Panu/Pani opiekę na najwyższym poziomie \
             oraz rozwijać narzędzia, które usprawniają proces współpracy.\n\n\
             Dla obecnych klientów przewidziałem/am okres przejściowy – w Pana/Pani \
             przypadku nowa stawka zacznie obowiązywać od {grace_date}.\n\n\
             W razie pytań jestem do dyspozycji.\n\
             Z wyrazami szacunku,"
        ),
        TemplateStyle::Casual => format!(
            "Hej {name}! 👋\n\
             Krótka sprawa organizacyjna – od {start_date} podnoszę ceny za {package} \
             z {old_price} zł na {new_price} zł.\n\n\
             Robię to po to, żeby dalej dowozić poziom (sprzęt, szkolenia, czas dla \
             podopiecznych), a nie się „rozjechać” finansowo.\n\n\
             Dla Ciebie mam jednak lepsze warunki:\n\
             – do {grace_date} możesz jeszcze działać na starej cenie,\n\
             ALBO wykupić teraz pakiet po starej stawce.\n\n\
             Jak coś jest niejasne – pisz śmiało.\n\
             Nic się nie zmienia jeśli chodzi o naszą współpracę – dalej ciśniemy. 💪"
        ),
        TemplateStyle::Vip => format!(
            "Dzień dobry {name},\n\
             w związku z rozwojem oferty premium oraz ograniczoną liczbą miejsc we \
             współpracy indywidualnej, od {start_date} aktualizuję stawkę za {package} \
             do {new_price} zł (obecnie: {old_price} zł).\n\n\
             Zmiana ta odzwierciedla aktualny poziom zaangażowania, dostępności oraz \
             rezultatów, jakie osiągają moi klienci.\n\n\
             Jako osoba już ze mną współpracująca, otrzymuje Pan/Pani preferencyjne \
             warunki:\n\
             – nowa stawka zacznie obowiązywać dopiero od {grace_date},\n\
             – do tego czasu może Pan/Pani wykupić kolejne pakiety po obecnej cenie.\n\n\
             Dziękuję za zaufanie i cieszę się na dalszą współpracę."
        ),
    }
}
