use tokio::sync::Semaphore;
use crate::core::{ConvertSettings, OptimizeSettings};
use crate::utils::{PipelineError, PipelineResult};

fn validate_quality(label: &str, quality: u32) -> PipelineResult<()> {
    if quality == 0 || quality > 100 {
        return Err(PipelineError::validation(format!(
            "Invalid {label} quality value: {quality}. Must be between 1 and 100"
        )));
    }
    Ok(())
}

/// Validates format converter settings
pub fn validate_convert_settings(settings: &ConvertSettings) -> PipelineResult<()> {
    validate_quality(settings.target.extension(), settings.quality)?;

    if settings.workers == 0 {
        return Err(PipelineError::validation("Worker count cannot be 0"));
    }

    if settings.workers > Semaphore::MAX_PERMITS {
        return Err(PipelineError::validation(format!(
            "Invalid worker count: {}. Must be at most {}",
            settings.workers,
            Semaphore::MAX_PERMITS
        )));
    }

    Ok(())
}

/// Validates optimizer settings
pub fn validate_optimize_settings(settings: &OptimizeSettings) -> PipelineResult<()> {
    validate_quality("jpeg", settings.jpeg_quality)?;

    if settings.max_width == 0 {
        return Err(PipelineError::validation("Max width cannot be 0"));
    }

    if settings.png_compression > 9 {
        return Err(PipelineError::validation(format!(
            "Invalid PNG compression level: {}. Must be between 0 and 9",
            settings.png_compression
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(validate_convert_settings(&ConvertSettings::default()).is_ok());
        assert!(validate_optimize_settings(&OptimizeSettings::default()).is_ok());
    }

    #[test]
    fn quality_out_of_range_is_rejected() {
        for quality in [0, 101] {
            let convert = ConvertSettings { quality, ..ConvertSettings::default() };
            assert!(matches!(
                validate_convert_settings(&convert),
                Err(PipelineError::Validation(_))
            ));

            let optimize = OptimizeSettings { jpeg_quality: quality, ..OptimizeSettings::default() };
            assert!(validate_optimize_settings(&optimize).is_err());
        }
    }

    #[test]
    fn zero_workers_and_zero_width_are_rejected() {
        let convert = ConvertSettings { workers: 0, ..ConvertSettings::default() };
        assert!(validate_convert_settings(&convert).is_err());

        let optimize = OptimizeSettings { max_width: 0, ..OptimizeSettings::default() };
        assert!(validate_optimize_settings(&optimize).is_err());
    }

    #[test]
    fn worker_count_beyond_semaphore_capacity_is_rejected() {
        let convert = ConvertSettings { workers: usize::MAX, ..ConvertSettings::default() };
        assert!(matches!(
            validate_convert_settings(&convert),
            Err(PipelineError::Validation(_))
        ));

        let at_limit = ConvertSettings { workers: Semaphore::MAX_PERMITS, ..ConvertSettings::default() };
        assert!(validate_convert_settings(&at_limit).is_ok());
    }

    #[test]
    fn png_compression_above_nine_is_rejected() {
        let optimize = OptimizeSettings { png_compression: 10, ..OptimizeSettings::default() };
        assert!(validate_optimize_settings(&optimize).is_err());
    }
}
