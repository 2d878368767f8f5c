//! The lineup folder layout guide, formerly a help dialog.

/// Print how to add lineups to the gallery.
pub fn run_guide() {
    println!(
        "\
Adding lineups:

Create a `lineup` folder in the working directory (or point
`roots.override_dir` somewhere else, see `lineupctl config`). Inside it,
create one folder per lineup, named after the lineup; the folder name
becomes the label everywhere. Each folder holds two files:

  lineup/
    dragon-luna/
      lineup.png   thumbnail shown in the gallery
      code.json    {{\"code\": \"<share code>\", \"url\": \"<guide link>\"}}

`code` is the share code that `lineupctl copy` puts on the clipboard;
`url` is the guide page that `lineupctl open` displays. Both fields are
optional, and an entry without them still appears in the catalog.

Entries in the override folder come before the bundled ones under
`resources/lineup`, and the same name may appear in both roots."
    );
}
