use super::*;
use crate::algebra::*;
use crate::io::ConfigurablePrintTarget;
use crate::solver::core::{print_banner, SettingsError, StrategyKind, TransportState};
use std::io::Write;
use std::time::Duration;

impl<T> ConfigurablePrintTarget for DefaultInfo<T> {
    fn print_to_stdout(&mut self) {
        self.stream.print_to_stdout()
    }
    fn print_to_file(&mut self, file: std::fs::File) {
        self.stream.print_to_file(file)
    }
    fn print_to_stream(&mut self, stream: Box<dyn Write + Send + Sync>) {
        self.stream.print_to_stream(stream)
    }
    fn print_to_sink(&mut self) {
        self.stream.print_to_sink()
    }
    fn print_to_buffer(&mut self) {
        self.stream.print_to_buffer()
    }
    fn get_print_buffer(&mut self) -> std::io::Result<String> {
        self.stream.get_print_buffer()
    }
}

impl<T> DefaultInfo<T>
where
    T: FloatT,
{
    pub(crate) fn print_configuration(
        &mut self,
        settings: &DefaultSettings<T>,
        data: &TransportationProblem<T>,
    ) -> std::io::Result<()> {
        if !settings.verbose {
            return std::io::Result::Ok(());
        }

        let out = &mut self.stream;
        print_banner(out)?;

        let (m, n) = data.size();
        writeln!(out, "\nproblem:")?;
        writeln!(out, "  sources       = {}", m)?;
        writeln!(out, "  destinations  = {}", n)?;
        writeln!(out, "  total supply  = {}", data.supply().sum())?;
        writeln!(out, "  total demand  = {}", data.demand().sum())?;
        writeln!(out,)?;

        self.print_settings(settings)?;

        if settings.print_table {
            writeln!(self.stream, "{}\n", data)?;
        }

        std::io::Result::Ok(())
    }

    pub(crate) fn print_status_header(
        &mut self,
        settings: &DefaultSettings<T>,
        strategy: StrategyKind,
    ) -> std::io::Result<()> {
        if !settings.verbose {
            return std::io::Result::Ok(());
        }

        let out = &mut self.stream;

        writeln!(out, "method: {}", strategy)?;
        write!(out, "iter   ")?;
        write!(out, "cell          ")?;
        write!(out, "quantity      ")?;
        write!(out, "supply left   ")?;
        write!(out, "demand left")?;
        writeln!(out,)?;
        writeln!(
            out,
            "-------------------------------------------------------------"
        )?;
        out.flush()?;
        std::io::Result::Ok(())
    }

    pub(crate) fn print_status(
        &mut self,
        settings: &DefaultSettings<T>,
        cell: (usize, usize),
        qty: T,
        state: &TransportState<T>,
    ) -> std::io::Result<()> {
        if !settings.verbose {
            return std::io::Result::Ok(());
        }

        let out = &mut self.stream;
        let (row, col) = cell;

        write!(out, "{:>4}   ", self.iterations)?;
        write!(out, "{:<12}  ", format!("({}, {})", row, col))?;
        write!(out, "{:<12}  ", format!("{}", qty))?;
        write!(out, "{:<12}  ", format!("{}", state.supply[row]))?;
        write!(out, "{}", state.demand[col])?;
        writeln!(out,)?;

        std::io::Result::Ok(())
    }

    pub(crate) fn print_settings_error(
        &mut self,
        settings: &DefaultSettings<T>,
        err: &SettingsError,
    ) -> std::io::Result<()> {
        if !settings.verbose {
            return std::io::Result::Ok(());
        }
        writeln!(self.stream, "settings rejected: {}", err)
    }

    pub(crate) fn print_footer(&mut self, settings: &DefaultSettings<T>) -> std::io::Result<()> {
        if !settings.verbose {
            return std::io::Result::Ok(());
        }

        let out = &mut self.stream;

        writeln!(
            out,
            "-------------------------------------------------------------"
        )?;

        writeln!(out, "Terminated with status = {}", self.status)?;
        writeln!(out, "total cost = {}", self.total_cost)?;
        if self.residual > T::zero() {
            writeln!(out, "unallocated = {:.3e}", self.residual)?;
        }
        writeln!(
            out,
            "solve time = {:?}",
            Duration::from_secs_f64(self.solve_time)
        )?;
        out.flush()?;

        std::io::Result::Ok(())
    }

    fn print_settings(&mut self, settings: &DefaultSettings<T>) -> std::io::Result<()> {
        let out = &mut self.stream;
        let set = settings;

        writeln!(out, "settings:")?;
        writeln!(
            out,
            "  precision: {} bit, balance tol = {:.1e}",
            _get_precision_string::<T>(),
            set.balance_tol
        )?;
        writeln!(
            out,
            "  vogel singleton penalty = {}, print table = {}",
            set.vogel_singleton_penalty,
            _bool_on_off(set.print_table)
        )?;
        writeln!(out,)?;

        std::io::Result::Ok(())
    }
}

fn _bool_on_off(v: bool) -> &'static str {
    match v {
        true => "on",
        false => "off",
    }
}

fn _get_precision_string<T: FloatT>() -> String {
    (::std::mem::size_of::<T>() * 8).to_string()
}

#[test]
fn test_print_silent_when_not_verbose() {
    let settings = DefaultSettings::<f64>::default();
    let mut info = DefaultInfo::<f64>::new();
    info.print_to_buffer();
    info.print_footer(&settings).unwrap();
    assert_eq!(info.get_print_buffer().unwrap(), "");
}
