//! Interface Segregation: no implementor should be forced to provide methods
//! it cannot honour.

use std::io::Write;

use crate::{DemoError, Result};

// =============================================================================
// Violation: one fat interface for every kind of worker
// =============================================================================

pub trait WorkerV {
    fn work(&self, out: &mut dyn Write) -> Result<()>;
    fn eat(&self, out: &mut dyn Write) -> Result<()>;
    fn sleep(&self, out: &mut dyn Write) -> Result<()>;
}

pub struct RobotWorkerV;

impl WorkerV for RobotWorkerV {
    fn work(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Robot is working tirelessly.")?;
        Ok(())
    }

    fn eat(&self, _out: &mut dyn Write) -> Result<()> {
        Err(DemoError::NotSupported("Robots don't eat!"))
    }

    fn sleep(&self, _out: &mut dyn Write) -> Result<()> {
        Err(DemoError::NotSupported("Robots don't sleep!"))
    }
}

pub struct HumanWorkerV;

impl WorkerV for HumanWorkerV {
    fn work(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Human is working.")?;
        Ok(())
    }

    fn eat(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Human is eating lunch.")?;
        Ok(())
    }

    fn sleep(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Human is sleeping.")?;
        Ok(())
    }
}

pub fn run_violation(out: &mut dyn Write) -> Result<()> {
    let robot: &dyn WorkerV = &RobotWorkerV;
    robot.work(out)?;
    if let Err(err) = robot.eat(out) {
        if !err.is_didactic() {
            return Err(err);
        }
        writeln!(out, "Error: {err}")?;
    }
    Ok(())
}

// =============================================================================
// Obeying: small role traits, implemented only where they make sense
// =============================================================================

pub trait Work {
    fn work(&self, out: &mut dyn Write) -> Result<()>;
}

pub trait Eat {
    fn eat(&self, out: &mut dyn Write) -> Result<()>;
}

pub trait Sleep {
    fn sleep(&self, out: &mut dyn Write) -> Result<()>;
}

pub struct RobotWorker;

impl Work for RobotWorker {
    fn work(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Robot is working tirelessly.")?;
        Ok(())
    }
}

pub struct HumanWorker;

impl Work for HumanWorker {
    fn work(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Human is working.")?;
        Ok(())
    }
}

impl Eat for HumanWorker {
    fn eat(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Human is eating lunch.")?;
        Ok(())
    }
}

impl Sleep for HumanWorker {
    fn sleep(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Human is sleeping.")?;
        Ok(())
    }
}

/// Only workers that can do all three qualify; `RobotWorker` does not compile here.
pub fn daily_routine<W: Work + Eat + Sleep>(worker: &W, out: &mut dyn Write) -> Result<()> {
    worker.work(out)?;
    worker.eat(out)?;
    worker.sleep(out)
}

pub fn run_obeying(out: &mut dyn Write) -> Result<()> {
    let robot: &dyn Work = &RobotWorker;
    robot.work(out)?;
    daily_routine(&HumanWorker, out)
}
