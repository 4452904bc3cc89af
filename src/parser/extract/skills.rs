//! Tech-stack tagging against a fixed vocabulary.
//!
//! Matching is case-insensitive whole-word, with a handful of entries that
//! defeat word boundaries (symbols) or collide with English words (short
//! names) handled explicitly.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Language,
    Framework,
    Database,
    CloudDevOps,
    DataAi,
    Tool,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Language => "Languages",
            Category::Framework => "Frameworks",
            Category::Database => "Databases",
            Category::CloudDevOps => "Cloud & DevOps",
            Category::DataAi => "Data & AI",
            Category::Tool => "Tools",
        }
    }

    pub const ALL: [Category; 6] = [
        Category::Language,
        Category::Framework,
        Category::Database,
        Category::CloudDevOps,
        Category::DataAi,
        Category::Tool,
    ];
}

/// Closed vocabulary of recognized technology names. Declaration order is the
/// canonical output order.
pub const VOCABULARY: &[(&str, Category)] = &[
    // Languages
    ("Python", Category::Language),
    ("Java", Category::Language),
    ("C++", Category::Language),
    ("C", Category::Language),
    ("C#", Category::Language),
    ("JavaScript", Category::Language),
    ("JS", Category::Language),
    ("TypeScript", Category::Language),
    ("TS", Category::Language),
    ("HTML", Category::Language),
    ("CSS", Category::Language),
    ("SQL", Category::Language),
    ("NoSQL", Category::Language),
    ("Go", Category::Language),
    ("Golang", Category::Language),
    ("Rust", Category::Language),
    ("Swift", Category::Language),
    ("Kotlin", Category::Language),
    ("PHP", Category::Language),
    ("Ruby", Category::Language),
    ("Matlab", Category::Language),
    ("R", Category::Language),
    ("Scala", Category::Language),
    ("Dart", Category::Language),
    ("Lua", Category::Language),
    ("Perl", Category::Language),
    ("Haskell", Category::Language),
    ("Elixir", Category::Language),
    ("Erlang", Category::Language),
    ("Clojure", Category::Language),
    ("F#", Category::Language),
    ("Groovy", Category::Language),
    ("Julia", Category::Language),
    ("Assembly", Category::Language),
    ("Bash", Category::Language),
    ("Shell", Category::Language),
    ("PowerShell", Category::Language),
    ("VBA", Category::Language),
    ("Objective-C", Category::Language),
    ("Solidity", Category::Language),
    // Frameworks
    ("React", Category::Framework),
    ("React.js", Category::Framework),
    ("React Native", Category::Framework),
    ("Angular", Category::Framework),
    ("Vue", Category::Framework),
    ("Vue.js", Category::Framework),
    ("Next.js", Category::Framework),
    ("Nuxt.js", Category::Framework),
    ("Svelte", Category::Framework),
    ("Node", Category::Framework),
    ("Node.js", Category::Framework),
    ("Express", Category::Framework),
    ("NestJS", Category::Framework),
    ("Django", Category::Framework),
    ("Flask", Category::Framework),
    ("FastAPI", Category::Framework),
    ("Spring", Category::Framework),
    ("Spring Boot", Category::Framework),
    ("ASP.NET", Category::Framework),
    (".NET", Category::Framework),
    (".NET Core", Category::Framework),
    ("Entity Framework", Category::Framework),
    ("Rails", Category::Framework),
    ("Ruby on Rails", Category::Framework),
    ("Laravel", Category::Framework),
    ("Symfony", Category::Framework),
    ("CodeIgniter", Category::Framework),
    ("GraphQL", Category::Framework),
    ("Apollo", Category::Framework),
    ("Tailwind", Category::Framework),
    ("Bootstrap", Category::Framework),
    ("Material UI", Category::Framework),
    ("Chakra UI", Category::Framework),
    ("Sass", Category::Framework),
    ("Less", Category::Framework),
    ("jQuery", Category::Framework),
    ("Ember", Category::Framework),
    ("Backbone", Category::Framework),
    ("Redux", Category::Framework),
    ("MobX", Category::Framework),
    ("Flutter", Category::Framework),
    ("Ionic", Category::Framework),
    ("Xamarin", Category::Framework),
    ("Cordova", Category::Framework),
    ("Electron", Category::Framework),
    ("Swing", Category::Framework),
    ("JavaFX", Category::Framework),
    ("WPF", Category::Framework),
    ("Qt", Category::Framework),
    // Databases
    ("PostgreSQL", Category::Database),
    ("Postgres", Category::Database),
    ("MySQL", Category::Database),
    ("MariaDB", Category::Database),
    ("SQLite", Category::Database),
    ("Oracle", Category::Database),
    ("SQL Server", Category::Database),
    ("MSSQL", Category::Database),
    ("MongoDB", Category::Database),
    ("Mongo", Category::Database),
    ("Cassandra", Category::Database),
    ("Redis", Category::Database),
    ("Elasticsearch", Category::Database),
    ("DynamoDB", Category::Database),
    ("Firestore", Category::Database),
    ("Firebase", Category::Database),
    ("CouchDB", Category::Database),
    ("Neo4j", Category::Database),
    ("Realm", Category::Database),
    ("Supabase", Category::Database),
    // Cloud & DevOps
    ("AWS", Category::CloudDevOps),
    ("Amazon Web Services", Category::CloudDevOps),
    ("Azure", Category::CloudDevOps),
    ("GCP", Category::CloudDevOps),
    ("Google Cloud", Category::CloudDevOps),
    ("Heroku", Category::CloudDevOps),
    ("Vercel", Category::CloudDevOps),
    ("Netlify", Category::CloudDevOps),
    ("DigitalOcean", Category::CloudDevOps),
    ("Docker", Category::CloudDevOps),
    ("Kubernetes", Category::CloudDevOps),
    ("K8s", Category::CloudDevOps),
    ("Terraform", Category::CloudDevOps),
    ("Ansible", Category::CloudDevOps),
    ("Puppet", Category::CloudDevOps),
    ("Chef", Category::CloudDevOps),
    ("Vagrant", Category::CloudDevOps),
    ("Jenkins", Category::CloudDevOps),
    ("GitLab CI", Category::CloudDevOps),
    ("CircleCI", Category::CloudDevOps),
    ("Travis CI", Category::CloudDevOps),
    ("GitHub Actions", Category::CloudDevOps),
    ("TeamCity", Category::CloudDevOps),
    ("Bamboo", Category::CloudDevOps),
    ("Git", Category::CloudDevOps),
    ("GitHub", Category::CloudDevOps),
    ("GitLab", Category::CloudDevOps),
    ("Bitbucket", Category::CloudDevOps),
    ("SVN", Category::CloudDevOps),
    ("Mercurial", Category::CloudDevOps),
    ("Nginx", Category::CloudDevOps),
    ("Apache", Category::CloudDevOps),
    ("Kafka", Category::CloudDevOps),
    ("RabbitMQ", Category::CloudDevOps),
    ("ActiveMQ", Category::CloudDevOps),
    ("SQS", Category::CloudDevOps),
    ("SNS", Category::CloudDevOps),
    // Data & AI
    ("Pandas", Category::DataAi),
    ("NumPy", Category::DataAi),
    ("SciPy", Category::DataAi),
    ("Matplotlib", Category::DataAi),
    ("Seaborn", Category::DataAi),
    ("Scikit-learn", Category::DataAi),
    ("Sklearn", Category::DataAi),
    ("PyTorch", Category::DataAi),
    ("TensorFlow", Category::DataAi),
    ("Keras", Category::DataAi),
    ("OpenCV", Category::DataAi),
    ("NLP", Category::DataAi),
    ("LLM", Category::DataAi),
    ("GPT", Category::DataAi),
    ("BERT", Category::DataAi),
    ("Hugging Face", Category::DataAi),
    ("Spark", Category::DataAi),
    ("Hadoop", Category::DataAi),
    ("Databricks", Category::DataAi),
    ("Snowflake", Category::DataAi),
    ("BigQuery", Category::DataAi),
    ("Redshift", Category::DataAi),
    ("Tableau", Category::DataAi),
    ("Power BI", Category::DataAi),
    ("Looker", Category::DataAi),
    ("Airflow", Category::DataAi),
    ("dbt", Category::DataAi),
    ("Excel", Category::DataAi),
    // Tools
    ("Jira", Category::Tool),
    ("Confluence", Category::Tool),
    ("Trello", Category::Tool),
    ("Asana", Category::Tool),
    ("Notion", Category::Tool),
    ("Slack", Category::Tool),
    ("Teams", Category::Tool),
    ("Zoom", Category::Tool),
    ("Figma", Category::Tool),
    ("Sketch", Category::Tool),
    ("Adobe XD", Category::Tool),
    ("Photoshop", Category::Tool),
    ("Illustrator", Category::Tool),
    ("Selenium", Category::Tool),
    ("Cypress", Category::Tool),
    ("Playwright", Category::Tool),
    ("Jest", Category::Tool),
    ("Mocha", Category::Tool),
    ("Chai", Category::Tool),
    ("JUnit", Category::Tool),
    ("TestNG", Category::Tool),
    ("Pytest", Category::Tool),
    ("RSpec", Category::Tool),
    ("Postman", Category::Tool),
    ("Insomnia", Category::Tool),
    ("Swagger", Category::Tool),
    ("OpenAPI", Category::Tool),
    ("Linux", Category::Tool),
    ("Unix", Category::Tool),
    ("Ubuntu", Category::Tool),
    ("CentOS", Category::Tool),
    ("RedHat", Category::Tool),
    ("Windows", Category::Tool),
    ("MacOS", Category::Tool),
    ("Android", Category::Tool),
    ("iOS", Category::Tool),
    ("Unity", Category::Tool),
    ("Unreal Engine", Category::Tool),
];

// Word-boundary patterns, compiled once, index-aligned with VOCABULARY.
// Entries needing special handling get no pattern.
static WORD_RES: LazyLock<Vec<Option<Regex>>> = LazyLock::new(|| {
    VOCABULARY
        .iter()
        .map(|(name, _)| match *name {
            "C++" | "C#" | ".NET" | "Go" | "C" => None,
            _ => {
                let pattern = format!(r"\b{}\b", regex::escape(&name.to_lowercase()));
                Some(Regex::new(&pattern).unwrap())
            }
        })
        .collect()
});

static GO_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bgo\b").unwrap());
static LONE_C_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bc\b").unwrap());

/// Scan `text` for vocabulary entries. Returns matches deduplicated, in
/// vocabulary order.
pub fn scan(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut found = Vec::new();

    for (idx, (name, _)) in VOCABULARY.iter().enumerate() {
        let hit = match *name {
            // Symbols defeat \b, so plain containment.
            "C++" => lower.contains("c++"),
            "C#" => lower.contains("c#"),
            ".NET" => lower.contains(".net"),
            // Short overloaded tokens need strict whole-word matches; a lone
            // "C" must not fire off the "C" inside "C++"/"C#".
            "Go" => GO_RE.is_match(&lower),
            "C" => {
                LONE_C_RE.is_match(&lower)
                    && !lower.contains("c++")
                    && !lower.contains("c#")
            }
            _ => WORD_RES[idx].as_ref().is_some_and(|re| re.is_match(&lower)),
        };
        if hit && seen.insert(*name) {
            found.push((*name).to_string());
        }
    }

    found
}

pub fn category_of(name: &str) -> Option<Category> {
    VOCABULARY
        .iter()
        .find(|(entry, _)| *entry == name)
        .map(|(_, category)| *category)
}

// ── Tests ──
