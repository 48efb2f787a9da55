//! Domain code generators. Each one emits a full source-text block beginning
//! with an `export const <name> = ` declaration. The exact banners, indents
//! and the fixed api block are load-bearing: existing consumers of the
//! generated files expect these bytes.

use crate::domain::model::{ConfigData, Song};
use crate::utils::error::Result;
use crate::utils::escape::{escape_backtick, escape_string};
use serde::Serialize;
use serde_json::Value;

/// The function-valued part of the config export. Functions cannot be
/// represented as data, so this fragment is carried as opaque text.
const CONFIG_API_BLOCK: &str = "{
    youtubeIframe: 'https://www.youtube.com/iframe_api',
    youtubeThumbnail: (videoId) => `https://img.youtube.com/vi/${videoId}/hqdefault.jpg`,
    uiAvatars: (name, bg = '333', color = 'fff') =>
      `https://ui-avatars.com/api/?name=${encodeURIComponent(name)}&background=${bg}&color=${color}`
  }";

/// One field of an emitted export object: either plain data or an opaque
/// code fragment that the data grammar cannot hold.
enum ExportField<'a> {
    Json(&'static str, &'a Value),
    Raw(&'static str, &'static str),
}

/// Emits an object literal from the field list in one pass. Data fields use
/// quoted keys and 2-space JSON; raw fields use bare keys and their fragment
/// verbatim, separated from the data fields by a comma on its own line (the
/// layout the generated config files have always had).
fn emit_object(fields: &[ExportField<'_>]) -> Result<String> {
    let mut out = String::from("{\n");
    let mut first = true;
    for field in fields {
        match field {
            ExportField::Json(key, value) => {
                if !first {
                    out.push_str(",\n");
                }
                let json = serde_json::to_string_pretty(value)?;
                out.push_str("  \"");
                out.push_str(key);
                out.push_str("\": ");
                out.push_str(&indent_tail(&json, "  "));
            }
            ExportField::Raw(key, fragment) => {
                if !first {
                    out.push_str("\n,\n");
                }
                out.push_str("  ");
                out.push_str(key);
                out.push_str(": ");
                out.push_str(fragment);
            }
        }
        first = false;
    }
    out.push_str("\n}");
    Ok(out)
}

/// Re-indents every line after the first, so a pretty-printed value nests
/// correctly under its field key.
fn indent_tail(json: &str, pad: &str) -> String {
    let mut lines = json.lines();
    let mut out = String::from(lines.next().unwrap_or_default());
    for line in lines {
        out.push('\n');
        out.push_str(pad);
        out.push_str(line);
    }
    out
}

fn to_json_indent4<T: Serialize>(data: &T) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    data.serialize(&mut serializer)?;
    Ok(String::from_utf8(buf).expect("serde_json output is UTF-8"))
}

/// Playlist export. Songs are hand-formatted object literals rather than
/// plain JSON so lyrics can keep their embedded newlines in backtick quotes
/// while the other string fields use escaped double quotes. Hashtags embed
/// as compact JSON and the link is written through as-is.
pub fn generate_playlist_code(songs: &[Song]) -> Result<String> {
    let items = songs
        .iter()
        .map(|song| {
            let hashtags = serde_json::to_string(&song.hashtags)?;
            Ok(format!(
                "    {{\n        id: {},\n        title: \"{}\",\n        artist: \"{}\",\n        link: \"{}\",\n        hashtags: {},\n        comment: \"{}\",\n        lyrics: `{}`\n    }}",
                song.id,
                escape_string(&song.title),
                escape_string(&song.artist),
                song.link,
                hashtags,
                escape_string(&song.comment),
                escape_backtick(&song.lyrics),
            ))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(format!(
        "export const playlistData = [\n{}\n];",
        items.join(",\n")
    ))
}

/// Character export with its banner and the `characterProfiles`
/// compatibility alias.
pub fn generate_character_code(data: &Value) -> Result<String> {
    let code = serde_json::to_string_pretty(data)?;
    Ok(format!(
        "// ============================================================\n// 캐릭터 데이터\n// ============================================================\n\nexport const characterData = {};\n\n// 하위 호환성을 위한 export\nexport const characterProfiles = characterData.profiles;",
        code
    ))
}

pub fn generate_owner_code(data: &Value) -> Result<String> {
    Ok(format!(
        "export const ownerData = {};",
        to_json_indent4(data)?
    ))
}

pub fn generate_motif_code(data: &Value) -> Result<String> {
    Ok(format!(
        "// 모티프 데이터 (공통)\nexport const motifData = {};",
        to_json_indent4(data)?
    ))
}

/// Config export. All data fields are emitted in declaration order, then the
/// fixed function-valued `api` block, in a single pass over the field list.
pub fn generate_config_code(config: &ConfigData) -> Result<String> {
    let fields = [
        ExportField::Json("labels", &config.labels),
        ExportField::Json("theme", &config.theme),
        ExportField::Json("features", &config.features),
        ExportField::Json("player", &config.player),
        ExportField::Json("defaults", &config.defaults),
        ExportField::Json("components", &config.components),
        ExportField::Json("timing", &config.timing),
        ExportField::Json("bgMusicSections", &config.bg_music_sections),
        ExportField::Json("keepBgMusicSections", &config.keep_bg_music_sections),
        ExportField::Raw("api", CONFIG_API_BLOCK),
    ];
    Ok(format!(
        "// 앱 설정 (config)\nexport const config = {};",
        emit_object(&fields)?
    ))
}
