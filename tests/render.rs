use vizkit::prelude::*;
use vizkit::schema;

const CHART: &str = r##"{
    "width": 400,
    "height": 300,
    "margin": 20,
    "scales": {
        "x": {"type": "interval", "domain": ["mon", "tue", "wed"], "range": [0, 360], "margin": 0.5, "spacing": 0.5},
        "y": {"domain": [0, 40], "range": [260, 0]},
        "color": {"type": "discrete", "domain": ["low", "high"], "range": ["#1f77b4", "#d62728"]}
    },
    "axes": [
        {"scale": "x", "position": "bottom"},
        {"scale": "y", "position": "left", "grid": true}
    ],
    "geoms": [
        {
            "type": "rectangle",
            "data": [
                {"day": "mon", "top": 10, "level": "low"},
                {"day": "tue", "top": 35, "level": "high"},
                {"day": "fri", "top": 20, "level": "low"}
            ],
            "x": {"field": "day", "scale": "x"},
            "y": {"field": "top", "scale": "y"},
            "width": 80,
            "height": 40,
            "fill": {"field": "level", "scale": "color"}
        },
        {
            "type": "curve",
            "curve": "catmull-rom",
            "data": [{"v": 0, "t": 0}, {"v": 20, "t": 1}, {"v": 40, "t": 2}],
            "x": {"field": "t"},
            "y": {"field": "v", "scale": "y"},
            "stroke_color": "#333"
        },
        {"type": "x-rule", "y": {"field": "limit", "scale": "y"}, "data": [{"limit": 30}]}
    ]
}"##;

fn attribute<'a>(doc: &'a SvgDocument, id: NodeId, name: &str) -> Option<&'a str> {
    doc.element(id).and_then(|e| e.attribute(name))
}

#[test]
fn test_render_chart_end_to_end() {
    let value: serde_json::Value = serde_json::from_str(CHART).unwrap();
    schema::validate(&value).unwrap();

    let config = PlotConfig::from_json(CHART).unwrap();
    let plot = Plot::from_config(&config).unwrap();
    assert_eq!(plot.area(), Bounds::from_size(360.0, 260.0));

    let doc = plot.to_document().unwrap();
    let svg = doc.roots()[0];
    let scene = doc.element(svg).unwrap();
    let group = scene.children()[0];
    assert_eq!(attribute(&doc, group, "transform"), Some("translate(20,20)"));

    // three geoms then two axes, each in its own group
    let groups = doc.element(group).unwrap().children();
    assert_eq!(groups.len(), 5);

    // the "fri" bar has no band and is omitted
    let bars = doc.element(groups[0]).unwrap().children();
    assert_eq!(bars.len(), 2);
    assert_eq!(attribute(&doc, bars[0], "fill"), Some("#1f77b4"));
    assert_eq!(attribute(&doc, bars[1], "fill"), Some("#d62728"));
    // step = 360 / (2*0.5 + 2*0.5 + 3) = 72; "tue" starts at 72 * (0.5 + 0.5 + 1)
    let tue = attribute(&doc, bars[1], "d").unwrap();
    assert!(tue.starts_with("M144,32.5 L224,32.5"), "{}", tue);

    let curve = doc.element(groups[1]).unwrap().children()[0];
    let d = attribute(&doc, curve, "d").unwrap();
    assert!(d.starts_with("M0,260 C"));
    assert!(d.ends_with(",2,0"));
    assert_eq!(attribute(&doc, curve, "fill"), Some("none"));
    assert_eq!(attribute(&doc, curve, "stroke"), Some("#333"));

    let rule = doc.element(groups[2]).unwrap().children()[0];
    assert_eq!(attribute(&doc, rule, "d"), Some("M0,65 L360,65"));

    let labels: Vec<&str> = doc
        .find_all("text")
        .into_iter()
        .filter_map(|id| doc.element(id).and_then(|e| e.text()))
        .collect();
    assert_eq!(
        labels,
        vec!["mon", "tue", "wed", "0", "10", "20", "30", "40"]
    );

    let text = doc.render();
    assert!(text.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<svg "));
    assert!(text.contains("style=\"user-select: none\""));
    assert!(text.trim_end().ends_with("</svg>"));
}

#[test]
fn test_unknown_scale_is_rejected() {
    let json = r#"{"geoms": [{"type": "point", "x": {"field": "v", "scale": "nope"}}]}"#;
    let config = PlotConfig::from_json(json).unwrap();
    assert!(matches!(
        Plot::from_config(&config),
        Err(PlotError::InvalidConfig(_))
    ));
}

#[test]
fn test_save_without_declaration() {
    let path = std::env::temp_dir().join(format!("vizkit-render-{}.svg", std::process::id()));
    let plot = Plot::new(50.0, 50.0).geom(Geom::new(GeomKind::Point));
    plot.save(&path, false).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert!(written.starts_with("<svg "));
    assert!(written.contains("<circle cx=\"0\" cy=\"0\" fill=\"#000\" r=\"2\"/>"));
}
