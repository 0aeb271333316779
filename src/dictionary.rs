// File: src/dictionary.rs
use crate::core::types::{Category, DictionaryEntry};
use crate::error::{Result, VocabError};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

const PRONOUNS: &[(&str, &str)] = &[
    ("I", "eu"), ("you", "você"), ("he", "ele"), ("she", "ela"),
    ("it", "isso"), ("we", "nós"), ("they", "eles"), ("someone", "alguém"),
    ("everyone", "todos"), ("nobody", "ninguém"), ("this", "este"), ("that", "aquele"),
];

const VERBS: &[(&str, &str)] = &[
    ("eat", "comer"), ("run", "correr"), ("see", "ver"), ("want", "querer"),
    ("need", "precisar"), ("buy", "comprar"), ("sell", "vender"), ("find", "encontrar"),
    ("make", "fazer"), ("take", "pegar"), ("bring", "trazer"), ("open", "abrir"),
    ("close", "fechar"), ("read", "ler"), ("write", "escrever"), ("love", "amar"),
    ("hate", "odiar"), ("build", "construir"), ("paint", "pintar"), ("clean", "limpar"),
    ("carry", "carregar"), ("watch", "assistir"), ("cook", "cozinhar"), ("drive", "dirigir"),
];

const ADJECTIVES: &[(&str, &str)] = &[
    ("big", "grande"), ("small", "pequeno"), ("red", "vermelho"), ("blue", "azul"),
    ("old", "velho"), ("new", "novo"), ("happy", "feliz"), ("sad", "triste"),
    ("fast", "rápido"), ("slow", "lento"), ("hot", "quente"), ("cold", "frio"),
    ("beautiful", "bonito"), ("ugly", "feio"), ("cheap", "barato"), ("expensive", "caro"),
    ("strong", "forte"), ("weak", "fraco"), ("clean", "limpo"), ("dirty", "sujo"),
    ("quiet", "quieto"), ("loud", "barulhento"),
];

const CONNECTIVES: &[(&str, &str)] = &[
    ("and", "e"), ("but", "mas"), ("or", "ou"), ("because", "porque"),
    ("so", "então"), ("while", "enquanto"), ("although", "embora"), ("when", "quando"),
    ("if", "se"), ("however", "porém"), ("therefore", "portanto"), ("meanwhile", "enquanto isso"),
];

const SUBSTANTIVES: &[(&str, &str)] = &[
    ("apple", "maçã"), ("car", "carro"), ("house", "casa"), ("book", "livro"),
    ("dog", "cachorro"), ("cat", "gato"), ("water", "água"), ("bread", "pão"),
    ("door", "porta"), ("window", "janela"), ("table", "mesa"), ("chair", "cadeira"),
    ("city", "cidade"), ("street", "rua"), ("friend", "amigo"), ("school", "escola"),
    ("tree", "árvore"), ("flower", "flor"), ("money", "dinheiro"), ("music", "música"),
    ("coffee", "café"), ("letter", "carta"), ("garden", "jardim"), ("river", "rio"),
    ("boat", "barco"),
];

fn to_entries(rows: &[(&str, &str)]) -> Vec<DictionaryEntry> {
    rows.iter()
        .map(|&(english, portuguese)| DictionaryEntry::new(english, portuguese))
        .collect()
}

/// The five ordered word tables daily selection reads from.
/// The JSON shape uses the category labels as keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dictionaries {
    pub pronouns: Vec<DictionaryEntry>,
    pub verbs: Vec<DictionaryEntry>,
    pub adjectives: Vec<DictionaryEntry>,
    pub connectives: Vec<DictionaryEntry>,
    pub substantives: Vec<DictionaryEntry>,
}

impl Dictionaries {
    /// English/Portuguese tables shipped with the crate.
    pub fn builtin() -> Self {
        Self {
            pronouns: to_entries(PRONOUNS),
            verbs: to_entries(VERBS),
            adjectives: to_entries(ADJECTIVES),
            connectives: to_entries(CONNECTIVES),
            substantives: to_entries(SUBSTANTIVES),
        }
    }

    /// Loads replacement tables from a JSON file. Every table must be non-empty.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let dictionaries: Self = serde_json::from_reader(BufReader::new(file))?;
        dictionaries.validate()?;
        tracing::info!(
            path = %path.display(),
            total = Category::ALL.iter().map(|&c| dictionaries.entries(c).len()).sum::<usize>(),
            "loaded dictionaries"
        );
        Ok(dictionaries)
    }

    pub fn entries(&self, category: Category) -> &[DictionaryEntry] {
        match category {
            Category::Pronoun => &self.pronouns,
            Category::Verb => &self.verbs,
            Category::Adjective => &self.adjectives,
            Category::Connective => &self.connectives,
            Category::Substantive => &self.substantives,
        }
    }

    pub fn validate(&self) -> Result<()> {
        match Category::ALL.iter().find(|&&c| self.entries(c).is_empty()) {
            Some(category) => Err(VocabError::InvalidInput(format!("{} dictionary is empty", category))),
            None => Ok(()),
        }
    }
}

impl Default for Dictionaries {
    fn default() -> Self {
        Self::builtin()
    }
}
