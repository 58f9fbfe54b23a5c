//! Server-rendered kiosk screens
//!
//! The screens are plain HTML assembled inline; interactive behavior lives
//! in `public/js` and styling in `public/css`.

use axum::response::Html;
use itertools::Itertools;

use crate::model::api_model::RouteApi;

/// Desktop landing screen showing the operating hours of the day.
pub fn operation_time() -> Html<String> {
    Html(
        r#"<!DOCTYPE html>
<html lang="ja">
<head>
    <meta charset="utf-8">
    <title>Operation Time</title>
    <link rel="stylesheet" href="/css/kiosk.css">
</head>
<body class="desktop">
    <header>
        <h1>運行時間 / Operation Time</h1>
        <div id="clock"></div>
    </header>
    <main>
        <table class="hours">
            <tr><th>平日 / Weekdays</th><td>6:00 – 23:00</td></tr>
            <tr><th>土曜 / Saturday</th><td>6:30 – 22:30</td></tr>
            <tr><th>日祝 / Sunday &amp; Holidays</th><td>7:00 – 22:00</td></tr>
        </table>
        <nav>
            <a href="/navigation">のりば案内 / Navigation</a>
        </nav>
    </main>
    <script src="/js/clock.js"></script>
</body>
</html>"#
            .to_string(),
    )
}

/// Desktop navigation screen.
pub fn navigation() -> Html<String> {
    Html(
        r#"<!DOCTYPE html>
<html lang="ja">
<head>
    <meta charset="utf-8">
    <title>Navigation</title>
    <link rel="stylesheet" href="/css/kiosk.css">
</head>
<body class="desktop">
    <header>
        <h1>のりば案内 / Navigation</h1>
    </header>
    <main>
        <p>各のりばへは構内図の表示に従ってお進みください。</p>
        <p>Follow the posted station map to reach each bus bay.</p>
        <nav>
            <a href="/operationTime">運行時間 / Operation Time</a>
        </nav>
    </main>
</body>
</html>"#
            .to_string(),
    )
}

/// Tablet destination-selection screen, pre-populated with the routes that
/// have a terminal stop. Destination and station lists are fetched by the
/// page's script from the JSON endpoints.
pub fn destination_setting(routes: &[RouteApi]) -> Html<String> {
    let route_buttons = routes
        .iter()
        .map(|route| {
            format!(
                r#"            <button class="route" data-route-id="{}">{}系統 {}</button>"#,
                route.route_id, route.route_number, route.route_name
            )
        })
        .join("\n");

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="ja">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Destination Selection</title>
    <link rel="stylesheet" href="/css/kiosk.css">
</head>
<body class="tablet">
    <header>
        <h1>行先選択 / Destination Selection</h1>
    </header>
    <main>
        <section id="routes">
            <h2>系統 / Route</h2>
{route_buttons}
        </section>
        <section id="destinations" hidden>
            <h2>行先 / Destination</h2>
        </section>
        <section id="stations" hidden>
            <h2>停車駅 / Stations</h2>
            <ol id="station-list"></ol>
        </section>
    </main>
    <script src="/js/destination_setting.js"></script>
</body>
</html>"#
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn destination_setting_renders_route_buttons() {
        let routes = vec![
            RouteApi {
                route_id: 1,
                route_number: 11,
                route_name: "栄行き".to_string(),
            },
            RouteApi {
                route_id: 2,
                route_number: 25,
                route_name: "名古屋駅行き".to_string(),
            },
        ];

        let Html(page) = destination_setting(&routes);

        assert!(page.contains(r#"data-route-id="1""#));
        assert!(page.contains("11系統 栄行き"));
        assert!(page.contains("25系統 名古屋駅行き"));
    }

    #[test]
    fn destination_setting_with_no_routes_still_renders() {
        let Html(page) = destination_setting(&[]);

        assert!(page.contains("行先選択"));
    }
}
