#!startExtra "serde"
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
struct Greeting {
    project: String,
}

#!endExtra
fn main() {
    println!("Hello from {{projectName}}!");
    #!startExtra "serde"

    let greeting = Greeting {
        project: "{{projectName}}".to_string(),
    };
    match serde_json::to_string(&greeting) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("failed to serialise greeting: {e}"),
    }
    #!endExtra
}
