use crate::GcodeError;

/// One motion-control instruction. The stream is strictly ordered; the
/// artifact is the sequence of lines, never a set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Instruction {
    /// `G90` — absolute positioning.
    AbsolutePositioning,
    /// `G1 F<speed>` — feed rate for subsequent feed moves.
    SetSpeed(f64),
    /// `G0` — positioning move with the head state unchanged. An
    /// omitted axis is left uncommanded and omitted from the line.
    Travel {
        x: Option<f64>,
        y: Option<f64>,
        z: Option<f64>,
    },
    /// `G1` — feed move, used for Z actuation and the initial head lift.
    Move {
        x: Option<f64>,
        y: Option<f64>,
        z: Option<f64>,
    },
}

impl Instruction {
    pub fn travel_to(x: f64, y: f64) -> Self {
        Instruction::Travel {
            x: Some(x),
            y: Some(y),
            z: None,
        }
    }

    pub fn head_to(z: f64) -> Self {
        Instruction::Move {
            x: None,
            y: None,
            z: Some(z),
        }
    }

    /// Encode one instruction as its G-code line, CRLF-terminated.
    pub fn encode(&self) -> Result<String, GcodeError> {
        match *self {
            Instruction::AbsolutePositioning => Ok("G90;\r\n".to_string()),
            Instruction::SetSpeed(speed) => Ok(format!("G1 F{speed};\r\n")),
            Instruction::Travel { x, y, z } => Ok(format!("G0{};\r\n", axis_words(x, y, z)?)),
            Instruction::Move { x, y, z } => Ok(format!("G1{};\r\n", axis_words(x, y, z)?)),
        }
    }
}

fn axis_words(x: Option<f64>, y: Option<f64>, z: Option<f64>) -> Result<String, GcodeError> {
    if x.is_none() && y.is_none() && z.is_none() {
        return Err(GcodeError::InvalidMove);
    }
    let mut words = String::new();
    if let Some(x) = x {
        words.push_str(&format!(" X{x}"));
    }
    if let Some(y) = y {
        words.push_str(&format!(" Y{y}"));
    }
    if let Some(z) = z {
        words.push_str(&format!(" Z{z}"));
    }
    Ok(words)
}

/// An append-only, ordered G-code program.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    instructions: Vec<Instruction>,
}

impl Program {
    pub fn push(&mut self, instruction: Instruction) {
        self.instructions.push(instruction);
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Serialize the whole stream in order.
    pub fn encode(&self) -> Result<String, GcodeError> {
        let mut out = String::new();
        for instruction in &self.instructions {
            out.push_str(&instruction.encode()?);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_prologue_lines_exactly() {
        assert_eq!(Instruction::AbsolutePositioning.encode().unwrap(), "G90;\r\n");
        assert_eq!(Instruction::SetSpeed(5000.0).encode().unwrap(), "G1 F5000;\r\n");
        assert_eq!(Instruction::head_to(10.0).encode().unwrap(), "G1 Z10;\r\n");
        assert_eq!(Instruction::head_to(-2.0).encode().unwrap(), "G1 Z-2;\r\n");
    }

    #[test]
    fn omitted_axes_are_omitted_entirely() {
        assert_eq!(
            Instruction::travel_to(150.0, 105.0).encode().unwrap(),
            "G0 X150 Y105;\r\n"
        );
        let z_only = Instruction::Travel {
            x: None,
            y: None,
            z: Some(10.0),
        };
        assert_eq!(z_only.encode().unwrap(), "G0 Z10;\r\n");
    }

    #[test]
    fn fractional_coordinates_print_shortest_form() {
        assert_eq!(
            Instruction::travel_to(143.71, 105.0).encode().unwrap(),
            "G0 X143.71 Y105;\r\n"
        );
    }

    #[test]
    fn empty_move_is_rejected() {
        let empty = Instruction::Move {
            x: None,
            y: None,
            z: None,
        };
        assert_eq!(empty.encode(), Err(GcodeError::InvalidMove));

        let mut program = Program::default();
        program.push(Instruction::AbsolutePositioning);
        program.push(empty);
        assert_eq!(program.encode(), Err(GcodeError::InvalidMove));
    }
}
