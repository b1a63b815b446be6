use super::MessageKey;

pub(super) fn text(key: MessageKey) -> &'static str {
    use MessageKey::*;

    match key {
        MainCopy => "The Mathematics of Chocolate.",
        SubCopy => "Master the balance between nibs and added cacao butter with clear formulas.",
        OneLiner => "Instantly compute ideal recipes from nib weight and target cacao %.",

        Parameters => "PARAMETERS",
        NibWeight => "Nib Weight",
        NibWeightDesc => "Enter the total weight of cacao nibs in grams.",
        TargetCacao => "Target Cacao %",
        TargetCacaoDesc => {
            "Set the final target percentage for total cacao content (nibs + added cacao butter)."
        }
        RecipeDetails => "Recipe Details",
        OtherIngredients => "Other Ingredients",
        OtherIngredientsDesc => {
            "Percentage of milk powder or other ingredients that are neither cacao nor sugar."
        }
        CacaoButterInOther => "Cacao Butter in \"Other\"",
        CacaoButterInOtherDesc => {
            "Percentage of cacao butter contained within the \"Other Ingredients.\""
        }

        CacaoProfile => "Cacao Profile",
        TotalCacao => "Total Cacao",
        Breakdown => "Breakdown",
        FromNibs => "from nibs",
        FromOtherButter => "from \"Other\" cacao butter",
        Composition => "Composition",
        Sugar => "Sugar",
        Other => "Other Ingredients",
        Measurement => "Measurement",
        Nibs => "Nibs",
        CacaoButter => "Cacao Butter",
        TotalBatchWeight => "Total Batch Weight",
        CalculationDetails => "Calculation Details",
        CalcCbFromOther => "CB from Other",
        CalcNibCacao => "Nib-derived Cacao",
        CalcBatchFactor => "Batch Factor",
        CalcSugarPct => "Sugar %",
        CalcWeights => "Weights",

        Warning => "Warning",
        Error => "Error",

        ErrNibWeightTitle => "Nib Weight out of range",
        ErrNibWeightRange => "Nib weight must be between 100 g and 20,000 g.",
        ErrTargetCacaoTitle => "Target Cacao % out of range",
        ErrTargetCacaoRange => "Target cacao must be between 40% and 90%.",
        ErrOtherTitle => "Other Ingredients out of range",
        ErrOtherRange => "Other ingredients must be between 0% and 40%.",
        ErrButterTitle => "Cacao Butter in Other out of range",
        ErrButterRange => "Cacao butter in \"Other\" must be between 0% and 100%.",

        ErrNibsCacaoTitle => "Cacao % setting is not feasible",
        ErrNibsCacaoMsg => {
            "The cacao butter from \"Other Ingredients\" already exceeds or equals your Target \
             Cacao %. Increase the Target Cacao %, decrease Other Ingredients %, or decrease the \
             Cacao Butter ratio within \"Other\"."
        }
        ErrNoSugarTitle => "No room for sugar",
        ErrNoSugarMsg => {
            "Cacao content and Other Ingredients already exceed 100%. Decrease Target Cacao %, \
             decrease Other Ingredients %, or lower the Cacao Butter ratio in \"Other\"."
        }

        WarnDarkCacaoRange => {
            "Outside the typical dark chocolate range (60–85%). No issue if intentional."
        }
        WarnMilkCacaoRange => {
            "Outside the typical milk chocolate range (40–60%). Watch the mouthfeel and \
             sweetness balance."
        }
        WarnOtherHigh => {
            "Other Ingredients exceed 25%. The chocolate character may be diluted by fillers."
        }
        WarnButterHigh => {
            "Cacao butter in \"Other\" exceeds 60%. Excess fat may affect tempering and mouthfeel."
        }
        WarnSmallBatch => {
            "Very small batch. Typically treated as a test batch; reproducibility may vary."
        }
        WarnSugarUltraLow => {
            "Sugar is below 5%. This produces an ultra-bitter formulation with almost no sweetness."
        }
        WarnSugarLow => {
            "Sugar is quite low. This creates a connoisseur-level recipe focused on cacao character."
        }
        WarnSugarHigh => {
            "Sugar exceeds 50%. This departs significantly from typical Bean to Bar formulations."
        }

        PromptChooseAction => "What would you like to change?",
        PromptEnterValue => "Enter a new value",
        ActionSwitchLanguage => "Switch language (日本語)",
        ActionReset => "Reset to defaults",
        ActionQuit => "Quit",
    }
}
