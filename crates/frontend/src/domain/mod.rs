pub mod r001_pm_report;
