use gamethread::{Division, Roster};

const HOME_FORMAT: &str = r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>MLS Gamethread Generator</title>
</head>
<body>
  <h1>MLS Gamethread Generator</h1>
  <form id="generate" method="post" action="/generate/">
    <label>Away
      <select name="away">
        <option value="">Select a team</option>
{options}
      </select>
    </label>
    <label>Home
      <select name="home">
        <option value="">Select a team</option>
{options}
      </select>
    </label>
    <button type="submit">Generate</button>
  </form>
</body>
</html>
"#;

const OPTGROUP_FORMAT: &str = "        <optgroup label=\"{division}\">\n{teams}        </optgroup>\n";
const OPTION_FORMAT: &str = "          <option value=\"{shortcode}\">{name}</option>\n";

fn division_options(division: &Division) -> String {
    let teams: String = division
        .teams
        .iter()
        .map(|team| {
            OPTION_FORMAT
                .replace("{shortcode}", &team.shortcode)
                .replace("{name}", &team.name)
        })
        .collect();

    OPTGROUP_FORMAT
        .replace("{division}", &division.name)
        .replace("{teams}", &teams)
}

/// The team selection form, one optgroup per division.
pub fn home_page(roster: &Roster) -> String {
    let options: String = roster.divisions().iter().map(division_options).collect();
    HOME_FORMAT.replace("{options}", options.trim_end_matches('\n'))
}
