//! Plain-text rendering of an analysis report.

use std::io::{self, Write};

use tendency_stats::{
    descriptive::DescriptiveStats,
    distribution::{ClassRecord, Distribution},
    individual::IndividualDataset,
    result::{StatValue, Step, StepKind},
    summary::CentralTendency,
};

use crate::{
    schema::report::{DataReport, MeasureReport, Report},
    util::fmt_num,
};

/// Number of observations listed in full before the listing is abbreviated.
const MAX_LISTED_VALUES: usize = 20;

pub(crate) struct TextView {
    precision: usize,
}

impl TextView {
    pub(crate) fn new(precision: u8) -> Self {
        Self {
            precision: usize::from(precision),
        }
    }

    pub(crate) fn render<W>(&self, out: &mut W, report: &Report) -> io::Result<()>
    where
        W: Write,
    {
        match &report.data {
            DataReport::Grouped { distribution } => self.render_distribution(out, distribution)?,
            DataReport::Individual {
                observations,
                stats,
            } => self.render_observations(out, observations, stats)?,
        }
        let classes = report.data.distribution().map(Distribution::classes);
        for measure in &report.measures {
            writeln!(out)?;
            self.render_measure(out, measure, classes)?;
        }
        if let Some(summary) = &report.summary {
            writeln!(out)?;
            self.render_summary(out, summary)?;
        }
        Ok(())
    }

    /// Integral values are shown without decimals (counts, frequencies).
    fn num(&self, value: f64) -> String {
        if value.fract() == 0.0 && value.abs() < 1e15 {
            fmt_num(value, 0)
        } else {
            fmt_num(value, self.precision)
        }
    }

    fn value(&self, value: &StatValue) -> String {
        value
            .values()
            .iter()
            .map(|&v| self.num(v))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn render_distribution<W>(&self, out: &mut W, dist: &Distribution) -> io::Result<()>
    where
        W: Write,
    {
        let h = dist.class_width();
        writeln!(out, "Basic Information")?;
        writeln!(out, "  Number of classes:      {}", dist.classes().len())?;
        writeln!(out, "  Total observations (N): {}", dist.total_frequency())?;
        writeln!(out, "  Sum of fx (Σfx):        {}", self.num(dist.weighted_sum()))?;
        if h == 0.0 {
            writeln!(out, "  Class width (h):        0 (single values)")?;
        } else {
            writeln!(out, "  Class width (h):        {}", self.num(h))?;
        }
        writeln!(out)?;

        writeln!(out, "Frequency Distribution Table")?;
        writeln!(
            out,
            "  {:<8} {:<16} {:>14} {:>14} {:>14}",
            "Class", "Interval", "Midpoint (x)", "Frequency (f)", "f × x"
        )?;
        writeln!(out, "  {}", "-".repeat(70))?;
        for (i, class) in dist.classes().iter().enumerate() {
            writeln!(
                out,
                "  {:<8} {:<16} {:>14} {:>14} {:>14}",
                i + 1,
                class.label,
                self.num(class.midpoint),
                class.frequency,
                self.num(class.product()),
            )?;
        }
        writeln!(out, "  {}", "-".repeat(70))?;
        writeln!(
            out,
            "  {:<8} {:<16} {:>14} {:>14} {:>14}",
            "Total",
            "",
            "",
            dist.total_frequency(),
            self.num(dist.weighted_sum()),
        )?;
        Ok(())
    }

    fn render_observations<W>(
        &self,
        out: &mut W,
        data: &IndividualDataset,
        stats: &DescriptiveStats,
    ) -> io::Result<()>
    where
        W: Write,
    {
        writeln!(out, "Individual Data Information")?;
        writeln!(out, "  Number of observations: {}", stats.count)?;
        writeln!(out, "  Sum of all values (Σx): {}", self.num(stats.sum))?;
        writeln!(out, "  Minimum:                {}", self.num(stats.min))?;
        writeln!(out, "  Maximum:                {}", self.num(stats.max))?;
        writeln!(out, "  Range:                  {}", self.num(stats.range))?;
        writeln!(out)?;

        let fmt_values = |values: &[f64]| {
            values
                .iter()
                .map(|&v| self.num(v))
                .collect::<Vec<_>>()
                .join(", ")
        };
        let values = data.values();
        if values.len() <= MAX_LISTED_VALUES {
            writeln!(out, "Sorted data: {}", fmt_values(values))?;
        } else {
            writeln!(out, "First 10 values: {}", fmt_values(&values[..10]))?;
            writeln!(
                out,
                "Last 10 values:  {}",
                fmt_values(&values[values.len() - 10..])
            )?;
            writeln!(out, "(total: {} observations)", values.len())?;
        }
        Ok(())
    }

    fn render_measure<W>(
        &self,
        out: &mut W,
        report: &MeasureReport,
        classes: Option<&[ClassRecord]>,
    ) -> io::Result<()>
    where
        W: Write,
    {
        writeln!(out, "{} ({})", report.measure, report.method)?;

        if let Some(err) = &report.error {
            writeln!(out, "  error: {err}")?;
        }
        let Some(result) = &report.result else {
            return Ok(());
        };

        self.render_class_steps(out, &result.steps, classes)?;
        self.render_scalar_steps(out, &result.steps)?;

        if let Some(classes) = classes {
            let labels = result
                .modal_classes
                .iter()
                .filter_map(|&i| classes.get(i))
                .map(|c| c.label.as_str())
                .collect::<Vec<_>>();
            match (labels.is_empty(), result.class.and_then(|i| classes.get(i))) {
                (false, _) => writeln!(out, "  modal class(es): {}", labels.join(", "))?,
                (true, Some(class)) => writeln!(out, "  selected class: {}", class.label)?,
                (true, None) => {}
            }
        }
        if let Some(diagnostic) = &result.diagnostic {
            writeln!(out, "  note: {diagnostic}")?;
        }

        let value = self.value(&result.value);
        match report.modality {
            Some(modality) => writeln!(out, "  => {} = {value} ({modality})", report.measure)?,
            None => writeln!(out, "  => {} = {value}", report.measure)?,
        }
        Ok(())
    }

    fn render_summary<W>(&self, out: &mut W, summary: &CentralTendency) -> io::Result<()>
    where
        W: Write,
    {
        writeln!(out, "Summary")?;
        writeln!(out, "  Mean:     {}", self.value(&summary.mean.value))?;
        writeln!(out, "  Median:   {}", self.value(&summary.median.value))?;
        writeln!(
            out,
            "  Mode:     {} ({})",
            self.value(&summary.mode.value),
            summary.modality
        )?;
        if let Some(stats) = &summary.stats {
            writeln!(
                out,
                "  Range:    {} ({} - {})",
                self.num(stats.range),
                self.num(stats.min),
                self.num(stats.max)
            )?;
        }
        Ok(())
    }

    /// Per-class quantities as a table, one column per kind.
    fn render_class_steps<W>(
        &self,
        out: &mut W,
        steps: &[Step],
        classes: Option<&[ClassRecord]>,
    ) -> io::Result<()>
    where
        W: Write,
    {
        let mut kinds = Vec::<StepKind>::new();
        let mut num_rows = 0;
        for step in steps {
            if let Some(class) = step.class {
                if !kinds.contains(&step.kind) {
                    kinds.push(step.kind);
                }
                num_rows = num_rows.max(class + 1);
            }
        }
        if kinds.is_empty() {
            return Ok(());
        }

        write!(out, "  {:<16}", "Class")?;
        for kind in &kinds {
            write!(out, " {:>14}", kind.to_string())?;
        }
        writeln!(out)?;
        for row in 0..num_rows {
            let label = classes
                .and_then(|c| c.get(row))
                .map_or_else(|| format!("#{}", row + 1), |c| c.label.clone());
            write!(out, "  {label:<16}")?;
            for kind in &kinds {
                let cell = steps
                    .iter()
                    .find(|s| s.class == Some(row) && s.kind == *kind)
                    .map_or_else(|| "-".to_owned(), |s| self.num(s.value));
                write!(out, " {cell:>14}")?;
            }
            writeln!(out)?;
        }
        Ok(())
    }

    fn render_scalar_steps<W>(&self, out: &mut W, steps: &[Step]) -> io::Result<()>
    where
        W: Write,
    {
        let mut iter = steps.iter().filter(|s| s.class.is_none()).peekable();
        while let Some(step) = iter.next() {
            // value / occurrence pairs from the frequency count
            if step.kind == StepKind::DistinctValue
                && let Some(next) = iter.next_if(|s| s.kind == StepKind::Occurrences)
            {
                writeln!(
                    out,
                    "  value {:>12} occurs {} time(s)",
                    self.num(step.value),
                    self.num(next.value)
                )?;
                continue;
            }
            writeln!(out, "  {:<16} = {}", step.kind.to_string(), self.num(step.value))?;
        }
        Ok(())
    }
}
