//! Blocking read-eval loop over the object registry.

use std::io::{BufRead, Write};

use anyhow::Result;

use qchaos_core::{Entity, Stability};
use qchaos_inventory::{CooldownSweep, Listing, ObjectRegistry, QuantumObject};

const RULE: &str = "==================================================";
const NOTHING_ADDED: &str = "No objects have been added yet.";

/// What the loop should do after a step.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum MenuChoice {
    Add,
    List,
    Analyse,
    Cooldown,
    Report,
    Exit,
}

impl MenuChoice {
    const COUNT: u32 = 6;

    fn from_number(n: u32) -> Option<Self> {
        Some(match n {
            1 => Self::Add,
            2 => Self::List,
            3 => Self::Analyse,
            4 => Self::Cooldown,
            5 => Self::Report,
            6 => Self::Exit,
            _ => return None,
        })
    }
}

/// One operator session: owns the registry for its whole lifetime.
pub struct Session<R, W> {
    input: R,
    out: W,
    registry: ObjectRegistry,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, out: W, registry: ObjectRegistry) -> Self {
        Self {
            input,
            out,
            registry,
        }
    }

    pub fn registry(&self) -> &ObjectRegistry {
        &self.registry
    }

    pub fn into_parts(self) -> (ObjectRegistry, W) {
        (self.registry, self.out)
    }

    /// Runs until the operator picks exit or input ends.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.out, "=== QUANTUM CHAOS MANAGEMENT SYSTEM ===")?;
        tracing::info!(objects = self.registry.len(), "session started");

        loop {
            self.print_menu()?;
            let Some(n) = self.prompt_number("Your choice (1-6): ", MenuChoice::COUNT)? else {
                break;
            };
            let flow = match MenuChoice::from_number(n) {
                Some(MenuChoice::Add) => self.add_object()?,
                Some(MenuChoice::List) => self.list_objects()?,
                Some(MenuChoice::Analyse) => self.analyse()?,
                Some(MenuChoice::Cooldown) => self.cooldown()?,
                Some(MenuChoice::Report) => self.report()?,
                Some(MenuChoice::Exit) | None => Flow::Exit,
            };
            if flow == Flow::Exit {
                break;
            }
        }

        writeln!(self.out, "Exiting the system...")?;
        self.out.flush()?;
        tracing::info!(objects = self.registry.len(), "session ended");
        Ok(())
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.out, "\n{RULE}")?;
        writeln!(self.out, "QUANTUM STORAGE CONTROL PANEL")?;
        writeln!(self.out, "{RULE}")?;
        writeln!(self.out, "1. Add New Object")?;
        writeln!(self.out, "2. List Objects (Status Report)")?;
        writeln!(self.out, "3. Analyse Danger")?;
        writeln!(self.out, "4. Emergency Cooldown (eligible objects only)")?;
        writeln!(self.out, "5. System Report")?;
        writeln!(self.out, "6. Exit")?;
        Ok(())
    }

    fn add_object(&mut self) -> Result<Flow> {
        writeln!(self.out, "\n=== ADD NEW OBJECT ===")?;
        writeln!(self.out, "1. Storage Site")?;
        writeln!(self.out, "2. Analysis Procedure")?;
        let Some(kind) = self.prompt_number("Select object type (1-2): ", 2)? else {
            return Ok(Flow::Exit);
        };
        let Some(id) = self.prompt_line("Enter ID: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(stability) = self.prompt_stability("Enter stability (0-100): ")? else {
            return Ok(Flow::Exit);
        };

        let object = if kind == 1 {
            let Some(supervisor) = self.prompt_line("Enter supervisor: ")? else {
                return Ok(Flow::Exit);
            };
            QuantumObject::storage_site(id, supervisor)
        } else {
            let Some(analysis_kind) = self.prompt_line("Enter analysis kind: ")? else {
                return Ok(Flow::Exit);
            };
            QuantumObject::analysis_procedure(id, analysis_kind)
        };

        let added = self.registry.add(object);
        added.set_stability(stability.value())?;
        let (label, id) = (added.kind(), added.id().clone());
        writeln!(self.out, "Added {label} {id}.")?;
        Ok(Flow::Continue)
    }

    fn list_objects(&mut self) -> Result<Flow> {
        writeln!(self.out, "\n=== OBJECT LIST (STATUS REPORT) ===")?;
        match self.registry.list_all() {
            Listing::Empty => writeln!(self.out, "{NOTHING_ADDED}")?,
            Listing::Entries(entries) => {
                for (i, description) in entries.iter().enumerate() {
                    writeln!(self.out, "\n{}. Object:", i + 1)?;
                    writeln!(self.out, "{description}")?;
                }
            }
        }
        Ok(Flow::Continue)
    }

    fn analyse(&mut self) -> Result<Flow> {
        writeln!(self.out, "\n=== DANGER ANALYSIS ===")?;
        match self.registry.classify_all() {
            Listing::Empty => writeln!(self.out, "{NOTHING_ADDED}")?,
            Listing::Entries(assessments) => {
                for assessment in &assessments {
                    writeln!(self.out, "{assessment}")?;
                    writeln!(self.out, "---")?;
                }
            }
        }
        Ok(Flow::Continue)
    }

    fn cooldown(&mut self) -> Result<Flow> {
        writeln!(self.out, "\n=== EMERGENCY COOLDOWN ===")?;
        match self.registry.run_cooldown_on_all_eligible() {
            CooldownSweep::EmptyRegistry => writeln!(self.out, "{NOTHING_ADDED}")?,
            CooldownSweep::NoEligible => {
                writeln!(self.out, "No object eligible for cooldown was found.")?
            }
            CooldownSweep::Cooled(outcomes) => {
                for outcome in &outcomes {
                    writeln!(self.out, "{outcome}")?;
                    writeln!(self.out, "---")?;
                }
            }
        }
        Ok(Flow::Continue)
    }

    fn report(&mut self) -> Result<Flow> {
        let tally = self.registry.tally();
        writeln!(self.out, "\n=== SYSTEM REPORT ===")?;
        writeln!(self.out, "Total Objects: {}", tally.total)?;
        writeln!(self.out, "Critical Level: {}", tally.critical)?;
        writeln!(self.out, "Safe Level: {}", tally.safe)?;
        writeln!(self.out, "Moderate Risk Level: {}", tally.moderate)?;
        Ok(Flow::Continue)
    }

    /// `None` once input is exhausted.
    fn prompt_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn prompt_number(&mut self, prompt: &str, max: u32) -> Result<Option<u32>> {
        loop {
            let Some(line) = self.prompt_line(prompt)? else {
                return Ok(None);
            };
            match line.trim().parse::<u32>() {
                Ok(n) if (1..=max).contains(&n) => return Ok(Some(n)),
                Ok(_) => writeln!(
                    self.out,
                    "Invalid input! Please enter a number between 1 and {max}."
                )?,
                Err(_) => writeln!(self.out, "Invalid input! Please enter a numeric value.")?,
            }
            tracing::warn!(input = %line.trim(), "rejected menu input");
        }
    }

    fn prompt_stability(&mut self, prompt: &str) -> Result<Option<Stability>> {
        loop {
            let Some(line) = self.prompt_line(prompt)? else {
                return Ok(None);
            };
            match line.trim().parse::<f64>() {
                Ok(raw) => match Stability::new(raw) {
                    Ok(stability) => return Ok(Some(stability)),
                    Err(e) => writeln!(self.out, "Invalid input! {e}")?,
                },
                Err(_) => writeln!(self.out, "Invalid input! Please enter a numeric value.")?,
            }
            tracing::warn!(input = %line.trim(), "rejected stability input");
        }
    }
}
