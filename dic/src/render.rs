use std::io::{self, Write};

use console::Style;
use dictionary::{Definition, Meaning, WordEntry};

/// Writes lookup results as numbered, colorized blocks.
pub struct Renderer {
    colors: bool,
}

impl Renderer {
    pub fn new(colors: bool) -> Self {
        Self { colors }
    }

    /// Colors only when stdout is a terminal that supports them.
    pub fn for_stdout() -> Self {
        Self::new(console::colors_enabled())
    }

    fn style(&self) -> Style {
        Style::new().force_styling(self.colors)
    }

    pub fn render<W: Write>(&self, out: &mut W, entries: &[WordEntry]) -> io::Result<()> {
        for (index, entry) in entries.iter().enumerate() {
            if index > 0 {
                writeln!(out)?;
            }
            self.render_entry(out, entry, index + 1)?;
        }
        Ok(())
    }

    fn render_entry<W: Write>(&self, out: &mut W, entry: &WordEntry, number: usize) -> io::Result<()> {
        let heading = self.style().bold().green();
        write!(out, "{}", heading.apply_to(format!("{number}. {}", entry.word)))?;

        let phonetics = entry.phonetic_texts();
        if !phonetics.is_empty() {
            write!(out, " [{}]", phonetics.join(", "))?;
        }

        if !entry.meanings.is_empty() {
            writeln!(out)?;
            for meaning in &entry.meanings {
                self.render_meaning(out, meaning)?;
            }
        }
        Ok(())
    }

    fn render_meaning<W: Write>(&self, out: &mut W, meaning: &Meaning) -> io::Result<()> {
        if !meaning.part_of_speech.is_empty() {
            let part_of_speech = self.style().yellow();
            write!(out, "\n{}\n", part_of_speech.apply_to(&meaning.part_of_speech))?;
        }

        let mut content_after_definition = false;
        for definition in &meaning.definitions {
            if content_after_definition {
                writeln!(out)?;
            }
            content_after_definition |= self.render_definition(out, definition)?;
        }
        Ok(())
    }

    /// Returns whether anything besides the definition line was written.
    fn render_definition<W: Write>(&self, out: &mut W, definition: &Definition) -> io::Result<bool> {
        let label = self.style().italic();
        let text = self.style().bold().blue();
        writeln!(
            out,
            "{}{}",
            label.apply_to("def. "),
            text.apply_to(&definition.definition)
        )?;

        let mut extra = false;
        if !definition.example.is_empty() {
            extra = true;
            writeln!(out, "{}{}", label.apply_to("ex.  "), definition.example)?;
        }

        let synonyms = definition.present_synonyms();
        if !synonyms.is_empty() {
            extra = true;
            writeln!(out, "{} {}", label.apply_to("syn."), synonyms.join(", "))?;
        }

        let antonyms = definition.present_antonyms();
        if !antonyms.is_empty() {
            extra = true;
            writeln!(out, "{} {}", label.apply_to("ant."), antonyms.join(", "))?;
        }
        Ok(extra)
    }
}
