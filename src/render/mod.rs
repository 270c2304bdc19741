//! Page rendering for generated walls and exported snapshots.
//!
//! A page is one self-contained HTML document: the stylesheet and the
//! browser runtime are compiled into the binary from `assets/`, and the
//! cards plus configuration travel in a single JSON payload block that the
//! runtime reads on load. Cards are also rendered statically in their
//! current order so the page shows the wall before any script runs.

use rust_embed::RustEmbed;
use sha2::{Digest, Sha256};

use poster_wall_common::{Card, EmbeddedWall, LayoutField, WallSnapshot};

use crate::errors::RenderError;
use crate::util::{escape_script_json, extract_script_block, html_escape};

#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/assets/"]
struct Assets;

pub const STYLESHEET_ASSET: &str = "poster-wall.css";
pub const RUNTIME_ASSET: &str = "poster-wall.js";

/// Opening tag of the payload block.
pub const PAYLOAD_TAG: &str = r#"<script id="poster-wall-data" type="application/json">"#;

/// Prefix of the storage namespace given to exported snapshots.
pub const SNAPSHOT_NAMESPACE_PREFIX: &str = "posterWallSnapshot-";

const FONT_AWESOME_URL: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.4.0/css/all.min.css";
const FONTS_URL: &str = "https://fonts.googleapis.com/css2?family=Orbitron:wght@400;700;900&family=Rajdhani:wght@300;500;700&display=swap";
const SORTABLE_URL: &str = "https://cdn.jsdelivr.net/npm/sortablejs@1.15.2/Sortable.min.js";
const AVATAR_FALLBACK_URL: &str = "https://api.dicebear.com/7.x/shapes/svg?seed=ERROR";

fn asset(name: &'static str) -> Result<String, RenderError> {
    let file = Assets::get(name).ok_or(RenderError::MissingAsset(name))?;
    String::from_utf8(file.data.into_owned()).map_err(|_| RenderError::InvalidAsset { name })
}

/// Serialize the payload for embedding.
fn payload_json(wall: &EmbeddedWall) -> Result<String, RenderError> {
    let json = serde_json::to_string(wall).map_err(RenderError::Serialize)?;
    Ok(escape_script_json(&json))
}

fn render_card(card: &Card) -> String {
    let link_badge = if card.has_link() {
        r#"<div class="card-link-btn" title="Watch Now"><i class="fas fa-play"></i></div>"#
    } else {
        ""
    };
    format!(
        r#"<div class="card interactive" data-id="{id}">{link_badge}<img src="{src}" loading="lazy" alt="{title}"><div class="card-overlay"><div class="card-title">{title}</div></div></div>"#,
        id = html_escape(&card.id),
        src = html_escape(&card.src),
        title = html_escape(&card.title),
        link_badge = link_badge,
    )
}

fn render_range(field: LayoutField, label: &str, value: u32) -> String {
    let domain = field.domain();
    format!(
        r#"<div class="control-group">
            <div class="control-label">{label} <span data-value="{field}">{value}px</span></div>
            <input type="range" data-setting="{field}" min="{min}" max="{max}" value="{value}">
        </div>"#,
        label = label,
        field = field,
        value = value,
        min = domain.start(),
        max = domain.end(),
    )
}

/// Render the complete page for `wall`.
pub fn render_document(wall: &EmbeddedWall) -> Result<String, RenderError> {
    let config = &wall.config;
    let layout = config.default_layout();
    let stylesheet = asset(STYLESHEET_ASSET)?;
    let runtime = asset(RUNTIME_ASSET)?;
    let payload = payload_json(wall)?;

    let cards_html: String = wall.cards.iter().map(render_card).collect();
    let title = html_escape(&config.wall_title);
    let body_class = if config.show_titles_by_default {
        ""
    } else {
        "titles-hidden"
    };

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <link rel="stylesheet" href="{font_awesome}">
    <link rel="preconnect" href="https://fonts.googleapis.com">
    <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
    <link href="{fonts}" rel="stylesheet">
    <style>
{stylesheet}
    </style>
    <script src="{sortable}"></script>
</head>
<body class="{body_class}">
<div id="app">
    <div class="cyber-header">
        <div class="header-content">
            <img class="user-avatar" src="{avatar}" alt="User" onerror="this.src='{avatar_fallback}'">
            <div class="section-desc">{description}</div>
            <div class="stats-count" id="card-count">{count}</div>
            <div class="section-title glitch-text" data-text="{title}">{title}</div>
        </div>
    </div>

    <button class="toggle-btn" id="toggle-controls" title="Settings"><i class="fas fa-cog"></i></button>

    <div class="controls collapsed" id="controls">
        <h2 class="controls-heading">SYSTEM.CONFIG</h2>
        {card_width}
        {gap}
        {radius}
        <hr class="controls-rule">
        <div class="control-group">
            <label class="control-label clickable">SHOW.TITLES <input type="checkbox" id="show-titles"{checked}></label>
        </div>
        <div class="control-group">
            <label class="control-label clickable">EDIT.MODE <input type="checkbox" id="edit-mode"></label>
            <p class="control-hint">Check to rearrange via Drag &amp; Drop.</p>
        </div>
        <button class="btn" id="export-html"><i class="fas fa-save"></i> EXPORT.HTML</button>
        <button class="btn btn-secondary" id="reset-settings"><i class="fas fa-undo"></i> SYSTEM.RESET</button>
    </div>

    <div class="gallery-container" id="gallery-container" style="--card-width: {card_width_px}px; --gap: {gap_px}px; --radius: {radius_px}px;">
        <div class="gallery" id="gallery">{cards}</div>
    </div>
</div>
{payload_tag}{payload}</script>
<script>
{runtime}
</script>
</body>
</html>
"#,
        title = title,
        font_awesome = FONT_AWESOME_URL,
        fonts = FONTS_URL,
        stylesheet = stylesheet,
        sortable = SORTABLE_URL,
        body_class = body_class,
        avatar = html_escape(&config.avatar_url),
        avatar_fallback = AVATAR_FALLBACK_URL,
        description = html_escape(&config.wall_description),
        count = wall.cards.len(),
        card_width = render_range(LayoutField::CardWidth, "CARD.WIDTH", layout.card_width),
        gap = render_range(LayoutField::Gap, "GRID.GAP", layout.gap),
        radius = render_range(LayoutField::Radius, "BORDER.RADIUS", layout.radius),
        checked = if config.show_titles_by_default { " checked" } else { "" },
        card_width_px = layout.card_width,
        gap_px = layout.gap,
        radius_px = layout.radius,
        cards = cards_html,
        payload_tag = PAYLOAD_TAG,
        payload = payload,
        runtime = runtime,
    ))
}

/// Read the embedded payload back out of a rendered page.
pub fn extract_payload(html: &str) -> Result<EmbeddedWall, RenderError> {
    let block = extract_script_block(html, PAYLOAD_TAG).ok_or(RenderError::PayloadNotFound)?;
    serde_json::from_str(block).map_err(RenderError::InvalidPayload)
}

/// Storage namespace for a snapshot, derived from its content.
///
/// Returns `posterWallSnapshot-` followed by the first 12 hex characters of
/// the SHA256 of the serialized snapshot.
pub fn snapshot_namespace(snapshot: &WallSnapshot) -> Result<String, RenderError> {
    let json = serde_json::to_string(snapshot).map_err(RenderError::Serialize)?;
    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    let digest = format!("{:x}", hasher.finalize());
    Ok(format!("{}{}", SNAPSHOT_NAMESPACE_PREFIX, &digest[..12]))
}

/// Render an exported snapshot as a standalone page.
pub fn render_snapshot(snapshot: WallSnapshot) -> Result<String, RenderError> {
    let namespace = snapshot_namespace(&snapshot)?;
    render_document(&snapshot.into_embedded(namespace))
}
