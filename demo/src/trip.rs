//! Fixed demo scenario: five friends on a coastal road trip

use expense_ledger::Expense;
use rust_decimal::Decimal;

/// Named list of expenses to replay
#[derive(Debug, Clone)]
pub struct TripScenario {
    /// Scenario name
    pub name: String,

    /// Who travelled
    pub group: Vec<&'static str>,

    /// Expenses in the order they were paid
    pub expenses: Vec<Expense>,
}

const AGRIM: &str = "Agrim";
const GEET: &str = "Geet";
const ASHISH: &str = "Ashish";
const KARTIK: &str = "Kartik";
const LAVISHA: &str = "Lavisha";

const EVERYONE: &[&str] = &[AGRIM, GEET, ASHISH, KARTIK, LAVISHA];

/// (payer, amount in rupees, participants, description)
const EXPENSES: &[(&str, i64, &[&str], &str)] = &[
    (AGRIM, 3073, EVERYONE, "Diesel"),
    (AGRIM, 976, EVERYONE, "Breakfast A2B"),
    (LAVISHA, 145, &[ASHISH, KARTIK, LAVISHA, AGRIM, GEET], "Trin Cafe"),
    (ASHISH, 40, &[ASHISH, KARTIK, LAVISHA, AGRIM, GEET], "Water bottles"),
    (LAVISHA, 80, &[LAVISHA, GEET], "Trindavanam Cafe"),
    (KARTIK, 100, &[KARTIK, LAVISHA], "Ice Cream"),
    (LAVISHA, 60, EVERYONE, "Shore Temple Parking"),
    (LAVISHA, 200, EVERYONE, "Entry Tickets Mallapuram"),
    (LAVISHA, 100, &[GEET, KARTIK], "Coconut Water"),
    (LAVISHA, 1139, EVERYONE, "Lunch Mahabalipuram"),
    (LAVISHA, 455, &[ASHISH, LAVISHA], "Marc Cafe"),
    (LAVISHA, 200, &[KARTIK], "Marc Cafe"),
    (LAVISHA, 290, &[GEET, AGRIM], "Marc Cafe"),
    (LAVISHA, 139, &[GEET], "Baker St. Cinamon Roll"),
    (LAVISHA, 318, &[AGRIM], "Sarguru Lunch"),
    (LAVISHA, 186, &[GEET], "Sarguru Lunch"),
    (LAVISHA, 153, &[KARTIK], "Sarguru Lunch"),
    (LAVISHA, 410, &[ASHISH, LAVISHA], "Sarguru Lunch"),
    (LAVISHA, 54, EVERYONE, "Sarguru Lunch GST"),
    (LAVISHA, 150, EVERYONE, "Auroville Parking"),
    (LAVISHA, 647, &[KARTIK], "Zomato Dinner"),
    (LAVISHA, 1158, &[GEET], "Maxx Shopping"),
    (ASHISH, 2110, EVERYONE, "Diesel 2nd time"),
    (ASHISH, 970, &[ASHISH, LAVISHA], "Baker Street Packing"),
    (LAVISHA, 2242, EVERYONE, "Dillwala6 Dinner"),
    (ASHISH, 350, &[KARTIK], "B & C Breakfast"),
    (ASHISH, 660, &[LAVISHA], "B & C Breakfast"),
    (ASHISH, 180, &[GEET], "B & C Breakfast"),
    (ASHISH, 310, &[AGRIM], "B & C Breakfast"),
    (ASHISH, 560, &[ASHISH], "B & C Breakfast"),
    (ASHISH, 98, EVERYONE, "B & C Breakfast GST"),
    (LAVISHA, 470, &[AGRIM, GEET], "Aishwarya Bhawan Lunch"),
    (LAVISHA, 465, &[ASHISH, LAVISHA], "Aishwarya Bhawan Lunch"),
    (LAVISHA, 290, &[KARTIK], "Aishwarya Bhawan Lunch"),
    (LAVISHA, 1770, EVERYONE, "Boating Charges Paradise Beach"),
    (ASHISH, 103, EVERYONE, "Paradise Beach Parking"),
    (ASHISH, 13171, EVERYONE, "Revv Car"),
    (AGRIM, 890, &[GEET, LAVISHA], "Sula Wine"),
    (AGRIM, 2700, &[KARTIK, AGRIM], "Jamison"),
    (AGRIM, 520, &[KARTIK], "4 Beers Budwiser"),
    (AGRIM, 160, &[ASHISH], "Amstel Beer"),
    (LAVISHA, 2242, &[GEET, LAVISHA], "Wine"),
    (LAVISHA, 1542, &[GEET], "Red Wine"),
    (GEET, 9080, &[GEET, AGRIM], "4 Seasons Stay"),
    (AGRIM, 250, &[GEET], "Veg Biryani from Madras Wedding Biryani"),
    (AGRIM, 780, &[AGRIM, GEET], "Baker Street"),
    (AGRIM, 360, &[GEET], "Zomato Biryani"),
    (ASHISH, 258, &[LAVISHA], "Auroville Bakery"),
    (ASHISH, 210, &[ASHISH], "Auroville Bakery"),
    (ASHISH, 132, &[GEET], "Auroville Bakery"),
    (ASHISH, 265, &[AGRIM], "Auroville Bakery"),
    (ASHISH, 250, &[KARTIK], "Auroville Bakery"),
    (ASHISH, 53, EVERYONE, "Auroville Bakery GST"),
    (LAVISHA, 470, &[GEET, ASHISH, LAVISHA], "Tanto Veg Pizza"),
    (LAVISHA, 550, &[AGRIM, KARTIK], "Tanto Chicken Pizza"),
    (ASHISH, 51, EVERYONE, "Tanto GST"),
    (AGRIM, 450, &[KARTIK], "Zomato Chicken Biryani"),
    (ASHISH, 133, &[GEET], "Baker Street"),
    (ASHISH, 76, &[KARTIK], "Baker Street"),
    (LAVISHA, 60, &[GEET], "Bakery"),
];

/// The coastal road trip, expense by expense
pub fn coastal_trip() -> TripScenario {
    let expenses = EXPENSES
        .iter()
        .map(|(payer, amount, participants, description)| {
            Expense::new(*payer, Decimal::from(*amount), participants.iter().copied())
                .with_description(*description)
        })
        .collect();

    TripScenario {
        name: "Coastal road trip".to_string(),
        group: EVERYONE.to_vec(),
        expenses,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use expense_ledger::LedgerAccumulator;

    #[test]
    fn test_every_expense_is_valid() {
        let trip = coastal_trip();
        assert_eq!(trip.expenses.len(), EXPENSES.len());

        let mut ledger = LedgerAccumulator::new();
        assert_eq!(ledger.record_all(&trip.expenses).unwrap(), EXPENSES.len());

        for (person, _) in ledger.balances().iter() {
            assert!(trip.group.iter().any(|name| *name == person.as_str()));
        }
    }

    #[test]
    fn test_first_two_expenses() {
        let trip = coastal_trip();
        let mut ledger = LedgerAccumulator::new();
        ledger.record_all(&trip.expenses[..2]).unwrap();

        let lines: Vec<String> = ledger.summarize_balances().map(|l| l.to_string()).collect();
        assert_eq!(lines[0], "Agrim is owed 809.80 INR.");
        assert_eq!(lines[4], "Lavisha owes 809.80 INR.");
    }

    const FULL_TRIP_REPORT: &str = "\
Agrim owes 7815.40 INR.
Geet owes 7269.67 INR.
Ashish is owed 1436.73 INR.
Kartik owes 9648.00 INR.
Lavisha owes 2698.33 INR.

Detailed Transactions:
Geet owes Lavisha 5984.67 INR.
Geet owes Ashish 3570.20 INR.
Agrim owes Geet 2285.20 INR.
Agrim owes Ashish 2730.40 INR.
Agrim owes Lavisha 870.20 INR.
Lavisha owes Ashish 2554.53 INR.
Kartik owes Agrim 3129.80 INR.
Kartik owes Lavisha 2717.00 INR.
Kartik owes Ashish 3801.20 INR.

Summary of Total Amounts Owed:
Geet owes Lavisha a total of 5984.67 INR.
Geet owes Ashish a total of 3570.20 INR.
Agrim owes Geet a total of 2285.20 INR.
Agrim owes Ashish a total of 2730.40 INR.
Agrim owes Lavisha a total of 870.20 INR.
Lavisha owes Ashish a total of 2554.53 INR.
Kartik owes Agrim a total of 3129.80 INR.
Kartik owes Lavisha a total of 2717.00 INR.
Kartik owes Ashish a total of 3801.20 INR.
";

    #[test]
    fn test_full_trip_report() {
        let trip = coastal_trip();
        let mut ledger = LedgerAccumulator::new();
        ledger.record_all(&trip.expenses).unwrap();

        let summary = ledger.summarize_transactions();
        let detailed: Vec<String> = summary.detailed_lines().collect();
        assert_eq!(detailed.len(), 9);
        assert_eq!(detailed[0], "Geet owes Lavisha 5984.67 INR.");
        assert_eq!(detailed[8], "Kartik owes Ashish 3801.20 INR.");

        let mut report = String::new();
        for line in ledger.summarize_balances() {
            report.push_str(&format!("{}\n", line));
        }
        report.push_str(&summary.to_string());
        assert_eq!(report, FULL_TRIP_REPORT);
    }
}
